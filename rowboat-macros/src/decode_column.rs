use syn::{Error, Field, Ident, LitInt, LitStr, Result, Token, Type, spanned::Spanned};

pub(crate) const DEFAULT_SIZE: u32 = 255;

pub(crate) struct ColumnMetadata {
    pub(crate) ident: Ident,
    pub(crate) ty: Type,
    pub(crate) name: String,
    pub(crate) column_type: String,
    pub(crate) primary_key: bool,
    pub(crate) unique: bool,
    pub(crate) size: Option<u32>,
}

pub(crate) fn decode_column(field: &Field) -> Result<ColumnMetadata> {
    let Some(ident) = field.ident.clone() else {
        return Err(Error::new(field.span(), "Field is expected to have a name"));
    };
    let name = ident.to_string();
    let name = name.strip_prefix("r#").unwrap_or(&name).to_lowercase();
    let mut metadata = ColumnMetadata {
        ident,
        ty: field.ty.clone(),
        name,
        column_type: String::new(),
        primary_key: false,
        unique: false,
        size: None,
    };
    for attr in field.attrs.iter().filter(|v| v.path().is_ident("rowboat")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("primary_key") {
                metadata.primary_key = true;
            } else if meta.path.is_ident("unique") {
                metadata.unique = true;
            } else if meta.path.is_ident("size") {
                metadata.size = Some(if meta.input.peek(Token![=]) {
                    let value: LitInt = meta.value()?.parse()?;
                    value.base10_parse()?
                } else {
                    DEFAULT_SIZE
                });
            } else if meta.path.is_ident("name") {
                let value: LitStr = meta.value()?.parse()?;
                metadata.name = value.value();
            } else if meta.path.is_ident("column_type") {
                let value: LitStr = meta.value()?.parse()?;
                metadata.column_type = value.value();
            } else {
                return Err(meta.error(
                    "Unknown attribute, expected one of: primary_key, unique, size, name, column_type",
                ));
            }
            Ok(())
        })?;
    }
    if metadata.name.is_empty() {
        return Err(Error::new(field.span(), "The column name cannot be empty"));
    }
    Ok(metadata)
}
