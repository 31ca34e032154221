#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    Refresh,
    ToggleHelp,
    None,
}
