mod defaults;
mod model;

pub use model::PopupSettings;
