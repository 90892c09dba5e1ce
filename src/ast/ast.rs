use super::{expressions::Expr, statements::Stmt};

/// Statement Types
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum StmtType {
    ExpressionStmt,
    PrintStmt,
    VarDeclStmt,
    BlockStmt,
    IfStmt,
    WhileStmt,
    FnDeclStmt,
    ReturnStmt,
    ErrorStmt,
}

/// Expression Types
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum ExprType {
    Literal,
    Variable,
    Assignment,
    Logical,
    Binary,
    Unary,
    Call,
}

impl Stmt {
    pub fn get_stmt_type(&self) -> StmtType {
        match self {
            Stmt::Expression { .. } => StmtType::ExpressionStmt,
            Stmt::Print { .. } => StmtType::PrintStmt,
            Stmt::Var { .. } => StmtType::VarDeclStmt,
            Stmt::Block { .. } => StmtType::BlockStmt,
            Stmt::If { .. } => StmtType::IfStmt,
            Stmt::While { .. } => StmtType::WhileStmt,
            Stmt::Function { .. } => StmtType::FnDeclStmt,
            Stmt::Return { .. } => StmtType::ReturnStmt,
            Stmt::Error { .. } => StmtType::ErrorStmt,
        }
    }

    /// Returns true if this statement, or any statement nested in it,
    /// is an `Error` placeholder.
    pub fn contains_error(&self) -> bool {
        match self {
            Stmt::Error { .. } => true,
            Stmt::Block { statements } => statements.iter().any(Stmt::contains_error),
            Stmt::Function { body, .. } => body.iter().any(Stmt::contains_error),
            Stmt::If {
                then_branch,
                else_branch,
                ..
            } => {
                then_branch.contains_error()
                    || else_branch.as_ref().is_some_and(|stmt| stmt.contains_error())
            }
            Stmt::While { body, .. } => body.contains_error(),
            _ => false,
        }
    }
}

impl Expr {
    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expr::Literal { .. } => ExprType::Literal,
            Expr::Variable { .. } => ExprType::Variable,
            Expr::Assign { .. } => ExprType::Assignment,
            Expr::Logical { .. } => ExprType::Logical,
            Expr::Binary { .. } => ExprType::Binary,
            Expr::Unary { .. } => ExprType::Unary,
            Expr::Call { .. } => ExprType::Call,
        }
    }
}
