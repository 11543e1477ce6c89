use crate::decode_column::{ColumnMetadata, decode_column};
use convert_case::{Case, Casing};
use syn::{Error, Fields, ItemStruct, LitStr, Result, spanned::Spanned};

pub(crate) struct TableMetadata {
    pub(crate) item: ItemStruct,
    pub(crate) name: String,
    pub(crate) columns: Vec<ColumnMetadata>,
}

pub(crate) fn decode_table(item: ItemStruct) -> Result<TableMetadata> {
    if !item.generics.params.is_empty() {
        return Err(Error::new(
            item.generics.span(),
            "Entity cannot be derived for a generic struct",
        ));
    }
    let Fields::Named(fields) = &item.fields else {
        return Err(Error::new(
            item.span(),
            "Entity can only be derived for structs with named fields",
        ));
    };
    if fields.named.is_empty() {
        return Err(Error::new(
            item.ident.span(),
            "Entity requires at least one field",
        ));
    }
    let mut name = item.ident.to_string().to_case(Case::Flat);
    for attr in item.attrs.iter().filter(|v| v.path().is_ident("rowboat")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("table") {
                let value: LitStr = meta.value()?.parse()?;
                name = value.value();
                if name.is_empty() {
                    return Err(meta.error("The table name cannot be empty"));
                }
                Ok(())
            } else {
                Err(meta.error("Unknown attribute, use it like: `#[rowboat(table = \"name\")]`"))
            }
        })?;
    }
    let columns = fields
        .named
        .iter()
        .map(decode_column)
        .collect::<Result<Vec<_>>>()?;
    if columns.iter().filter(|c| c.primary_key).count() > 1 {
        return Err(Error::new(
            item.ident.span(),
            "At most one field can be the primary key",
        ));
    }
    Ok(TableMetadata {
        item,
        name,
        columns,
    })
}
