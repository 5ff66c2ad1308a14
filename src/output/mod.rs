//! Rendering trees as markup.
//!
//! There are two output methods: [`html`] produces HTML, compact or indented,
//! and [`code`] produces a colored, escaped view of the HTML source for
//! display in a page. Both walk the same stream of [`Output`] items.
use std::io;

pub mod code;
pub mod html;
mod pretty;
mod serializer;

pub(crate) use pretty::Pretty;
pub use pretty::PrettyOutputToken;
pub(crate) use serializer::gen_outputs;
pub use serializer::{Output, OutputToken};

/// Widest indentation written, in spaces.
pub const MAX_INDENT_WIDTH: usize = 1 << 16;

pub(crate) fn write_indentation<W: io::Write>(
    w: &mut W,
    level: usize,
    tab_spaces: usize,
) -> io::Result<()> {
    let width = level.saturating_mul(tab_spaces).min(MAX_INDENT_WIDTH);
    if width > 0 {
        w.write_all(" ".repeat(width).as_bytes())?;
    }
    Ok(())
}
