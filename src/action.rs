#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    FocusNext,
    FocusPrev,
    Scroll(isize),
    ScrollTop,
    Refresh,
    None,
}
