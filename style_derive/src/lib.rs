extern crate proc_macro;

use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{self, Data, DeriveInput, Expr, Field, Fields, Ident, Type, punctuated::Punctuated, token::Comma};

/// Generates change-reporting accessors for a struct with named fields.
///
/// For every field `foo: T` the following are generated:
///
/// * `set_foo(&mut self, value: T) -> bool`, returning whether the stored value changed
/// * `with_foo(self, value: T) -> Self`, for building values in one expression
///
/// Alongside the struct an enum `<Name>Change` is emitted, holding one variant per
/// field, together with `apply(&mut self, change) -> bool`.
///
/// A field annotated with `#[clamp(min, max)]` has incoming values clamped to
/// that range before they are compared and stored.
#[proc_macro_attribute]
pub fn properties(_attributes: TokenStream, items: TokenStream) -> TokenStream {
    let mut ast = syn::parse(items).unwrap();

    match impl_properties(&mut ast) {
	Err(e) => panic!("{}", e),
	Ok(r) => r
    }
}

struct Property {
    name: Ident,
    ty: Type,
    clamp: Option<(Expr, Expr)>,
}

fn camel_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut upper_next = true;

    for c in input.chars() {
	if c == '_' {
	    upper_next = true;
	    continue;
	}

	if upper_next {
	    result.extend(c.to_uppercase());
	    upper_next = false;
	} else {
	    result.push(c);
	}
    }

    result
}

///Removes the `clamp` attribute from `field`, returning its bounds
fn consume_clamp_bounds(field: &mut Field) -> Result<Option<(Expr, Expr)>, String> {
    let clamp_attr_pos = match field.attrs.iter().position(|attr| attr.path.is_ident("clamp")) {
	Some(pos) => pos,
	None => return Ok(None),
    };

    let clamp_attr = field.attrs.remove(clamp_attr_pos);
    let bounds = clamp_attr
	.parse_args_with(Punctuated::<Expr, Comma>::parse_terminated)
	.map_err(|err| format!("Invalid clamp bounds: {}", err))?;

    let mut bounds = bounds.into_iter();
    match (bounds.next(), bounds.next(), bounds.next()) {
	(Some(min), Some(max), None) => Ok(Some((min, max))),
	_ => Err(String::from("clamp takes exactly two bounds: #[clamp(min, max)]")),
    }
}

fn parse_fields(fields: &mut Punctuated<Field, Comma>) -> Result<Vec<Property>, String> {
    let mut properties = Vec::new();

    for field in fields {
	let clamp = consume_clamp_bounds(field)?;
	let name = field.ident.clone().ok_or("Fields must be named.")?;

	properties.push(Property {
	    name,
	    ty: field.ty.clone(),
	    clamp,
	});
    }

    Ok(properties)
}

fn impl_properties(item: &mut DeriveInput) -> Result<TokenStream, String> {
    if !item.generics.params.is_empty() {
	return Err(String::from("generic parameters are not currently supported"));
    }

    let fields = match &mut item.data {
	Data::Struct(data) => match &mut data.fields {
	    Fields::Named(named) => &mut named.named,
	    _ => return Err(String::from("Must use named fields.")),
	},
	_ => return Err(String::from("Must be defined with a struct.")),
    };

    let properties = parse_fields(fields)?;

    let type_name = &item.ident;
    let vis = &item.vis;
    let change_name = format_ident!("{}Change", type_name);

    let names: Vec<&Ident> = properties.iter().map(|p| &p.name).collect();
    let types: Vec<&Type> = properties.iter().map(|p| &p.ty).collect();
    let setters: Vec<Ident> = properties.iter()
	.map(|p| format_ident!("set_{}", p.name))
	.collect();
    let withs: Vec<Ident> = properties.iter()
	.map(|p| format_ident!("with_{}", p.name))
	.collect();
    let variants: Vec<Ident> = properties.iter()
	.map(|p| format_ident!("{}", camel_case(&p.name.to_string())))
	.collect();
    let setter_docs: Vec<String> = properties.iter()
	.map(|p| format!("Sets `{}`, returning whether the stored value changed.", p.name))
	.collect();
    let normalizers: Vec<proc_macro2::TokenStream> = properties.iter()
	.map(|p| match &p.clamp {
	    Some((min, max)) => quote! { let value = value.max(#min).min(#max); },
	    None => quote! {},
	})
	.collect();

    let change_doc = format!("A single field update for [`{}`].", type_name);

    let result = quote! {
	#item

	#[doc = #change_doc]
	#[derive(Debug, Clone, PartialEq)]
	#vis enum #change_name {
	    #( #variants(#types) ),*
	}

	impl #type_name {
	    #(
		#[doc = #setter_docs]
		pub fn #setters(&mut self, value: #types) -> bool {
		    #normalizers
		    if self.#names == value {
			return false;
		    }
		    self.#names = value;
		    true
		}

		pub fn #withs(mut self, value: #types) -> Self {
		    self.#setters(value);
		    self
		}
	    )*

	    ///Applies a single change, returning whether anything changed
	    pub fn apply(&mut self, change: #change_name) -> bool {
		match change {
		    #( #change_name::#variants(value) => self.#setters(value), )*
		}
	    }
	}
    };

    Ok(result.into())
}
