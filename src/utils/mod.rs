pub mod session;
pub mod templates;

pub use session::{
    active_vocabulary, clear_uploaded_vocabulary, load_quiz_state, save_quiz_state, set_flash,
    set_uploaded_vocabulary, take_flash,
};
pub use templates::{load_templates, render_template};
