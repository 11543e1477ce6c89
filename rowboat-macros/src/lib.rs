mod decode_column;
mod decode_table;
mod encode_column_def;
mod from_row;

use decode_table::decode_table;
use encode_column_def::encode_column_def;
use from_row::{from_row, row};
use proc_macro::TokenStream;
use quote::quote;
use syn::{ItemStruct, parse_macro_input};

/// Derive `Entity`, `Target` and `Element` for a struct with named fields.
///
/// ```ignore
/// #[derive(Entity)]
/// #[rowboat(table = "users")]
/// struct User {
///     #[rowboat(primary_key)]
///     id: i64,
///     #[rowboat(size = 100)]
///     name: String,
///     #[rowboat(unique)]
///     email: String,
/// }
/// ```
#[proc_macro_derive(Entity, attributes(rowboat))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    let item = parse_macro_input!(input as ItemStruct);
    let table = match decode_table(item) {
        Ok(v) => v,
        Err(e) => return e.to_compile_error().into(),
    };
    let ident = &table.item.ident;
    let type_name = ident.to_string();
    let table_name = &table.name;
    let column_defs = table.columns.iter().map(encode_column_def);
    let from_row = from_row(&table);
    let row = row(&table);
    quote! {
        impl ::rowboat::Entity for #ident {
            fn schema() -> &'static ::rowboat::RecordSchema {
                static SCHEMA: ::std::sync::LazyLock<::rowboat::RecordSchema> =
                    ::std::sync::LazyLock::new(|| ::rowboat::RecordSchema {
                        name: #type_name,
                        table: #table_name,
                        columns: ::std::boxed::Box::new([#(#column_defs),*]),
                    });
                &SCHEMA
            }
            #from_row
            #row
        }
        impl ::rowboat::Target for #ident {
            fn shape() -> ::rowboat::TypeShape {
                ::rowboat::TypeShape::Record(<Self as ::rowboat::Entity>::schema())
            }
            fn store(&mut self, row: ::rowboat::RowLabeled) -> ::rowboat::Result<()> {
                *self = <Self as ::rowboat::Entity>::from_row(row)?;
                Ok(())
            }
        }
        impl ::rowboat::Element for #ident {
            fn element_shape() -> ::rowboat::TypeShape {
                ::rowboat::TypeShape::Record(<Self as ::rowboat::Entity>::schema())
            }
            fn scan(row: ::rowboat::RowLabeled) -> ::rowboat::Result<Self> {
                <Self as ::rowboat::Entity>::from_row(row)
            }
        }
    }
    .into()
}
