use crate::decode_table::TableMetadata;
use proc_macro2::TokenStream;
use quote::quote;

/// Positional decoder: the struct literal evaluates its fields in declaration order, so the
/// n-th `next_field` call reads the n-th column.
pub(crate) fn from_row(table: &TableMetadata) -> TokenStream {
    let fields = table.columns.iter().map(|c| {
        let ident = &c.ident;
        let ty = &c.ty;
        quote!(#ident: scanner.next_field::<#ty>()?)
    });
    quote! {
        fn from_row(row: ::rowboat::RowLabeled) -> ::rowboat::Result<Self> {
            let mut scanner = ::rowboat::RowScanner::new(<Self as ::rowboat::Entity>::schema(), row)?;
            Ok(Self {
                #(#fields,)*
            })
        }
    }
}

pub(crate) fn row(table: &TableMetadata) -> TokenStream {
    let values = table.columns.iter().map(|c| {
        let ident = &c.ident;
        let ty = &c.ty;
        quote!(<#ty as ::rowboat::AsValue>::as_value(::std::clone::Clone::clone(&self.#ident)))
    });
    quote! {
        fn row(&self) -> ::rowboat::Row {
            ::std::boxed::Box::new([#(#values),*])
        }
    }
}
