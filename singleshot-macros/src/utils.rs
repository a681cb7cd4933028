use proc_macro2::{Span, TokenStream};
use syn::{Block, Error, ItemFn, parse_quote};

/// Fails if the attribute was given any arguments.
pub(crate) fn reject_args(attr: TokenStream, name: &str) -> Result<(), Error> {
    if attr.is_empty() {
        return Ok(());
    }

    Err(Error::new(
        Span::call_site(),
        format!("#[singleshot::{name}] does not take arguments"),
    ))
}

/// Rewrites `async fn f() -> R { body }` into `fn f() -> R { block_on(async move { body }) }`.
///
/// Attributes, visibility and the return type are preserved. The function
/// must be async and take no parameters.
pub(crate) fn into_blocking(mut function: ItemFn, name: &str) -> Result<ItemFn, Error> {
    if function.sig.asyncness.is_none() {
        return Err(Error::new_spanned(
            function.sig.fn_token,
            format!("#[singleshot::{name}] must be used on an async function"),
        ));
    }

    if !function.sig.inputs.is_empty() {
        return Err(Error::new_spanned(
            &function.sig.inputs,
            format!("#[singleshot::{name}] functions cannot take parameters"),
        ));
    }

    function.sig.asyncness = None;

    let body = &function.block;
    let wrapped: Block = parse_quote! {{
        ::singleshot::runtime::block_on(async move #body)
    }};
    function.block = Box::new(wrapped);

    Ok(function)
}
