//! Procedural macros shared by the vtiles crates.

mod args;

use crate::args::ContextArgs;
use proc_macro::TokenStream;
use proc_macro2::{Ident, Span};
use quote::{ToTokens, quote};
use syn::parse_macro_input;

/// Wraps the body of a function returning `anyhow::Result` so that every error leaving it
/// carries an additional context message.
///
/// ```ignore
/// #[context("Failed to write tile {coord:?}")]
/// fn write_tile(coord: TileCoord) -> Result<()> { ... }
/// ```
///
/// A leading `move,` moves captured arguments into the wrapping closure.
#[proc_macro_attribute]
pub fn context(args: TokenStream, input: TokenStream) -> TokenStream {
	let ContextArgs(move_token, format_args) = parse_macro_input!(args);
	let mut input = parse_macro_input!(input as syn::ItemFn);

	let body = &input.block;
	let return_type = &input.sig.output;
	let err = Ident::new("err", Span::mixed_site());

	if let syn::ReturnType::Default = return_type {
		return syn::Error::new_spanned(&input.sig, "function should return Result")
			.to_compile_error()
			.into();
	}

	let force_fn_once = Ident::new("force_fn_once", Span::mixed_site());
	let new_body = quote! {
		// Moving a non-`Copy` value into the closure makes borrowck treat it as `FnOnce`.
		let #force_fn_once = ::core::iter::empty::<()>();
		(#move_token || #return_type {
			::core::mem::drop(#force_fn_once);
			#body
		})().map_err(|#err| #err.context(format!(#format_args)).into())
	};
	input.block.stmts = vec![syn::Stmt::Expr(syn::Expr::Verbatim(new_body), None)];

	input.into_token_stream().into()
}
