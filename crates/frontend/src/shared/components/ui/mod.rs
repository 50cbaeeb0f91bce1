//! Field primitives shared by every entity form and toolbar.

pub mod button;
pub mod date_input;
pub mod image_picker;
pub mod input;
pub mod multi_select;
pub mod select;
pub mod textarea;

pub use button::Button;
pub use date_input::DateInput;
pub use image_picker::ImagePicker;
pub use input::Input;
pub use multi_select::MultiSelect;
pub use select::Select;
pub use textarea::Textarea;
