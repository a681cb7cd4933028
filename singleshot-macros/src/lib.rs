mod utils;

use proc_macro::TokenStream;
use quote::quote;
use syn::{Error, ItemFn, parse_macro_input};

/// Marks an async `fn main` to be driven by `singleshot::runtime::block_on`.
///
/// The attribute takes no arguments. Using it on a function that is not
/// async, not named `main`, or that takes parameters is a compile error.
///
/// ```rust,ignore
/// #[singleshot::main]
/// async fn main() {
///     // ...
/// }
/// ```
#[proc_macro_attribute]
pub fn main(attr: TokenStream, item: TokenStream) -> TokenStream {
    if let Err(err) = utils::reject_args(attr.into(), "main") {
        return err.to_compile_error().into();
    }

    let input = parse_macro_input!(item as ItemFn);

    if input.sig.ident != "main" {
        return Error::new_spanned(&input.sig.ident, "#[singleshot::main] must be used on fn main")
            .to_compile_error()
            .into();
    }

    match utils::into_blocking(input, "main") {
        Ok(function) => quote! { #function }.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Marks an async function as a test driven by `singleshot::runtime::block_on`.
///
/// The attribute takes no arguments. Using it on a function that is not
/// async or that takes parameters is a compile error. The return type is
/// kept, so tests may return `Result`.
///
/// ```rust,ignore
/// #[singleshot::test]
/// async fn resumes_once() {
///     // ...
/// }
/// ```
#[proc_macro_attribute]
pub fn test(attr: TokenStream, item: TokenStream) -> TokenStream {
    if let Err(err) = utils::reject_args(attr.into(), "test") {
        return err.to_compile_error().into();
    }

    let input = parse_macro_input!(item as ItemFn);

    match utils::into_blocking(input, "test") {
        Ok(function) => quote! {
            #[::core::prelude::v1::test]
            #function
        }
        .into(),
        Err(err) => err.to_compile_error().into(),
    }
}
