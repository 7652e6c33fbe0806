use std::io::Write;

use nothrow_ir::TokenKind;
use nothrow_lexer::TokenStream;
use nothrow_lexer_core::SourceBuffer;

use crate::config::LexConfig;
use crate::error::DriverError;

/// Write one line per token, from `config.from` to end of file.
///
/// ```text
///     0..4     keyword      void
///     8..9     `;`          ;
/// ```
pub fn run_lex<W: Write>(config: &LexConfig, out: &mut W) -> Result<(), DriverError> {
    let path = &config.file;
    let bytes = std::fs::read(path).map_err(|source| DriverError::ReadSource {
        path: path.clone(),
        source,
    })?;
    let Ok(len) = u32::try_from(bytes.len()) else {
        return Err(DriverError::FileTooLarge { path: path.clone() });
    };
    let text = String::from_utf8(bytes).map_err(|_| DriverError::NotUtf8 { path: path.clone() })?;
    if config.from > len {
        return Err(DriverError::OffsetOutOfRange {
            path: path.clone(),
            offset: config.from,
            len,
        });
    }
    if !text.is_char_boundary(config.from as usize) {
        return Err(DriverError::NotCharBoundary {
            path: path.clone(),
            offset: config.from,
        });
    }

    let source = SourceBuffer::new(&text);
    for token in TokenStream::new(&source, config.from) {
        let spelling = text.get(token.span.to_range()).unwrap_or_default();
        // The spelling column already names the keyword.
        let kind = match token.kind {
            TokenKind::Keyword(_) => token.kind.display_name().to_owned(),
            kind => kind.to_string(),
        };
        writeln!(
            out,
            "{:>5}..{:<5} {kind:<12} {}",
            token.span.start,
            token.span.end,
            spelling.escape_debug()
        )?;
    }
    Ok(())
}
