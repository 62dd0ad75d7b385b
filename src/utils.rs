//! Assorted utilities and helpers.

/// Which trajectory indexes the rolling DP rows.
///
/// The row buffers have the length of the *inner* trajectory, so the choice
/// only affects memory, never the result: the distance function is always
/// called as `d(P[i], Q[j])` regardless of orientation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RowLayout {
    /// Rows run along P, the outer loop walks Q.
    #[default]
    PInner,
    /// Rows run along Q, the outer loop walks P.
    QInner,
    /// Rows run along whichever trajectory is shorter (P on ties).
    Shorter,
}

impl RowLayout {
    /// Resolve the layout for concrete lengths: `true` when P is the inner
    /// (row-indexed) dimension.
    #[inline]
    pub fn inner_is_p(self, p_len: usize, q_len: usize) -> bool {
        match self {
            RowLayout::PInner => true,
            RowLayout::QInner => false,
            RowLayout::Shorter => p_len <= q_len,
        }
    }
}
