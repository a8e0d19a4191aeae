pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod ignore;
pub mod line_break;
pub mod list;
pub mod media;
pub mod meta;
pub mod table;
pub mod theme_break;

pub use block_quote::{LineQuote, MultilineQuote};
pub use code_fence::{CodeFence, FenceKind};
pub use heading::{HeadingSyntax, TitleSyntax};
pub use ignore::Ignore;
pub use line_break::LineBreak;
pub use list::ListKind;
pub use media::Media;
pub use meta::Meta;
pub use table::TableSyntax;
pub use theme_break::ThemeBreak;
