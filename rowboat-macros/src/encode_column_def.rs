use crate::decode_column::ColumnMetadata;
use proc_macro2::TokenStream;
use quote::quote;

pub(crate) fn encode_column_def(column: &ColumnMetadata) -> TokenStream {
    let name = &column.name;
    let field = column.ident.to_string();
    let field = field.strip_prefix("r#").unwrap_or(&field);
    let ty = &column.ty;
    let primary_key = column.primary_key;
    let unique = column.unique;
    let size = match column.size {
        Some(v) => quote!(::std::option::Option::Some(#v)),
        None => quote!(::std::option::Option::None),
    };
    let column_type = &column.column_type;
    quote! {
        ::rowboat::ColumnDef {
            name: #name,
            field: #field,
            value: <#ty as ::rowboat::AsValue>::as_empty_value(),
            nullable: <#ty as ::rowboat::AsValue>::NULLABLE,
            primary_key: #primary_key,
            unique: #unique,
            size: #size,
            column_type: #column_type,
        }
    }
}
