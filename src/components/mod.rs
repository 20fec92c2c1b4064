mod contact_form;
mod nav;
mod smooth_scroll;
mod toaster;

pub use contact_form::ContactForm;
pub use nav::Nav;
pub use smooth_scroll::SmoothScroll;
pub use toaster::{use_toasts, Toaster, Toasts};
