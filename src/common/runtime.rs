use std::future::Future;

/// Drives `f` to completion on a fresh current-thread runtime.
///
/// Must not be called from within another tokio runtime.
pub(crate) fn block_on_current_thread<F, O>(f: F) -> std::io::Result<O>
where
    F: Future<Output = O>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    Ok(runtime.block_on(f))
}
