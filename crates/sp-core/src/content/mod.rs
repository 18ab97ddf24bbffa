mod content_type;
mod fragment;

pub use content_type::ContentType;
pub use fragment::ContentFragment;
