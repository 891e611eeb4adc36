pub mod path;
pub mod renderer;
pub mod theme;

pub use path::standardize_path;
pub use renderer::{RenderOutcome, TemplateArgs, TemplateRenderer};
pub use theme::{NoTheme, ThemeDirs, ThemeLocator};
