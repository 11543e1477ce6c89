/// Words left bare by [`auto_quote`]: SQL keywords, operators spelled as words and common
/// function names. Compared case-insensitively.
pub const RESERVED_KEYWORDS: &[&str] = &[
    "ALL", "ALTER", "AND", "ANY", "AS", "ASC", "AVG", "BETWEEN", "BIGINT", "BLOB", "BOOLEAN", "BY",
    "CASCADE", "CASE", "CAST", "COALESCE", "COLUMN", "CONFLICT", "CONSTRAINT", "COUNT", "CREATE",
    "CROSS", "CURRENT_DATE", "CURRENT_TIME", "CURRENT_TIMESTAMP", "DEFAULT", "DELETE", "DESC",
    "DISTINCT", "DO", "DROP", "ELSE", "END", "ESCAPE", "EXCEPT", "EXISTS", "FALSE", "FETCH",
    "FIRST", "FOR", "FOREIGN", "FROM", "FULL", "GROUP", "HAVING", "IF", "ILIKE", "IN", "INDEX",
    "INNER", "INSERT", "INTEGER", "INTERSECT", "INTO", "IS", "JOIN", "KEY", "LAST", "LEFT", "LIKE",
    "LIMIT", "LOWER", "MAX", "MIN", "NATURAL", "NOT", "NOTHING", "NOW", "NULL", "NULLS", "OFFSET",
    "ON", "OR", "ORDER", "OUTER", "PRIMARY", "REAL", "REFERENCES", "RETURNING", "RIGHT", "ROWS",
    "SELECT", "SET", "SUM", "TABLE", "TEXT", "THEN", "TRUE", "UNION", "UNIQUE", "UPDATE", "UPPER",
    "USING", "VALUES", "VARCHAR", "WHEN", "WHERE", "WITH",
];

pub fn is_reserved_keyword(word: &str) -> bool {
    RESERVED_KEYWORDS
        .iter()
        .any(|v| v.eq_ignore_ascii_case(word))
}

/// Wrap every bare identifier of `sql` in double quotes, reserved keywords excepted.
///
/// The transformation is textual: already quoted identifiers, numbers and `$n` placeholders are
/// kept as they are, but words inside string literals and comments are quoted like any other.
/// ```rust
/// use rowboat_core::auto_quote;
/// assert_eq!(
///     auto_quote("SELECT * FROM user WHERE name = $1"),
///     r#"SELECT * FROM "user" WHERE "name" = $1"#,
/// );
/// ```
pub fn auto_quote(sql: &str) -> String {
    let mut out = String::with_capacity(sql.len() + 16);
    let mut chars = sql.char_indices().peekable();
    while let Some((start, c)) = chars.next() {
        if c == '"' {
            out.push(c);
            for (_, c) in chars.by_ref() {
                out.push(c);
                if c == '"' {
                    break;
                }
            }
        } else if c == '$' || c.is_ascii_digit() {
            out.push(c);
            while let Some((_, c)) = chars.next_if(|(_, c)| c.is_alphanumeric() || *c == '_') {
                out.push(c);
            }
        } else if c.is_alphabetic() || c == '_' {
            let mut end = start + c.len_utf8();
            while let Some((i, c)) = chars.next_if(|(_, c)| c.is_alphanumeric() || *c == '_') {
                end = i + c.len_utf8();
            }
            let word = &sql[start..end];
            if is_reserved_keyword(word) {
                out.push_str(word);
            } else {
                out.push('"');
                out.push_str(word);
                out.push('"');
            }
        } else {
            out.push(c);
        }
    }
    out
}
