use crate::{ErrorKind, Result, Value};

/// `column = $placeholder` fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub column: String,
    pub placeholder: usize,
}

/// Conditions, assignments and the arguments they bind.
///
/// Each clause takes placeholder `$(args.len() + 1)` when it is added, so placeholders follow
/// call order no matter where the clause lands in the statement.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Clauses {
    pub conditions: Vec<Clause>,
    pub assignments: Vec<Clause>,
    pub args: Vec<Value>,
}

impl Clauses {
    fn push(&mut self, column: &str, value: Value) -> Clause {
        self.args.push(value);
        Clause {
            column: column.to_string(),
            placeholder: self.args.len(),
        }
    }

    pub fn add_condition(&mut self, column: &str, value: impl Into<Value>) {
        let clause = self.push(column, value.into());
        self.conditions.push(clause);
    }

    pub fn add_assignment(&mut self, column: &str, value: impl Into<Value>) {
        let clause = self.push(column, value.into());
        self.assignments.push(clause);
    }

    /// Every placeholder must point at one argument and every argument must be used once.
    pub fn check(&self) -> Result<()> {
        let expected = self.conditions.len() + self.assignments.len();
        if self.args.len() != expected {
            return Err(ErrorKind::Compile(format!(
                "{} arguments for {} clauses",
                self.args.len(),
                expected
            ))
            .into());
        }
        let mut seen = vec![false; self.args.len()];
        for clause in self.conditions.iter().chain(&self.assignments) {
            if clause.column.is_empty() {
                return Err(ErrorKind::Compile("A clause has an empty column name".into()).into());
            }
            match seen.get_mut(clause.placeholder.wrapping_sub(1)) {
                Some(used) if !*used => *used = true,
                _ => {
                    return Err(ErrorKind::Compile(format!(
                        "Placeholder ${} of column `{}` does not match an argument",
                        clause.placeholder, clause.column
                    ))
                    .into());
                }
            }
        }
        Ok(())
    }
}

pub(crate) fn check_table(statement: &str, table: &str) -> Result<()> {
    if table.is_empty() {
        return Err(ErrorKind::Compile(format!("{statement} requires a table name")).into());
    }
    Ok(())
}
