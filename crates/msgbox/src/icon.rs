//! Icon classes understood by the message body.
//!
//! An icon is just a class on the icon slot; hosts decide what each class looks like.
//! A class the host does not recognise leaves the slot empty.

pub const INFO: &str = "msgbox-info";
pub const WARNING: &str = "msgbox-warning";
pub const QUESTION: &str = "msgbox-question";
pub const ERROR: &str = "msgbox-error";

/// Marks the icon slot as hidden.
pub const HIDDEN_CLASS: &str = "msgbox-hidden";
/// Set on the body while an icon is shown.
pub const BODY_ICON_CLASS: &str = "msgbox-has-icon";
