use crate::goods::{ColorId, Good};
use crate::input::focus::FocusArea;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Noop,
    Quit,
    Tick,

    FocusNext,
    FocusPrev,
    FocusArea(FocusArea),

    // Form actions
    /// New full value of the name field
    NameInput(String),
    /// Id chosen in the color select; the placeholder id yields no color
    ColorSelect(ColorId),
    Submit,
    /// A validated good emitted by the form
    AddGood(Good),

    // Goods list actions
    ScrollUp(u16),
    ScrollDown(u16),
    ScrollPageUp,
    ScrollPageDown,
    ScrollToTop,
    ScrollToBottom,
}
