// Convenience entry points for callers that do not need incremental control.

/// Parse a whole source string into a [`Program`].
///
/// ## Returns
/// The program on success, or every diagnostic recorded during the pass.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse(source: &str) -> Result<Program, Vec<SyntaxError>> {
    parse_with_registry(source, Arc::new(FunctionRegistry::new()))
}

/// Like [`parse`], but records `include` directives into the caller's registry.
pub fn parse_with_registry(
    source: &str,
    registry: Arc<FunctionRegistry>,
) -> Result<Program, Vec<SyntaxError>> {
    let mut parser = Parser::with_registry(Lexer::new(source), registry);
    let program = parser.parse_program();
    if parser.errors().is_empty() {
        Ok(program)
    } else {
        Err(parser.into_errors())
    }
}
