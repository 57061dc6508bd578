use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{call::CallTarget, core::ParseResult},
    },
};

/// Precedence of the sequencing comma, below every arithmetic operator.
const SEQUENCE_PRECEDENCE: u8 = 1;

/// An operator waiting on the stack for its right operand.
#[derive(Debug)]
pub(crate) enum Operator {
    Unary { op: UnaryOperator, position: usize },
    Binary { op: BinaryOperator, position: usize },
    Sequence { position: usize },
}

impl Operator {
    const fn precedence(&self) -> u8 {
        match self {
            Self::Unary { .. } => UnaryOperator::PRECEDENCE,
            Self::Binary { op, .. } => op.precedence(),
            Self::Sequence { .. } => SEQUENCE_PRECEDENCE,
        }
    }
}

/// An open bracket, possibly the opening parenthesis of a call.
#[derive(Debug)]
pub(crate) struct Group {
    bracket:    Token,
    call:       Option<CallTarget>,
    /// Number of operands that were already on the output stack when the
    /// group opened. Operators inside the group may not reach below it.
    base:       usize,
    separators: usize,
    position:   usize,
}

#[derive(Debug)]
enum StackEntry {
    Group(Group),
    Operator(Operator),
}

/// The two stacks of the shunting-yard algorithm.
///
/// Instead of values, the output stack holds finished subtrees; reducing an
/// operator pops its operands and pushes the combined node.
#[derive(Debug, Default)]
pub(crate) struct ShuntingYard {
    output:    Vec<Expr>,
    operators: Vec<StackEntry>,
    /// Bases of the open groups, innermost last.
    floors:    Vec<usize>,
}

impl ShuntingYard {
    pub(crate) fn push_operand(&mut self, operand: Expr) {
        self.output.push(operand);
    }

    /// Returns `true` when no bracket is open.
    pub(crate) fn at_top_level(&self) -> bool {
        self.floors.is_empty()
    }

    pub(crate) fn open_group(&mut self, bracket: Token, call: Option<CallTarget>, position: usize) {
        self.floors.push(self.output.len());
        self.operators.push(StackEntry::Group(Group { bracket,
                                                      call,
                                                      base: self.output.len(),
                                                      separators: 0,
                                                      position }));
    }

    /// Prefix operators bind to the operand that follows, so nothing is
    /// reduced when one is pushed.
    pub(crate) fn push_unary(&mut self, op: UnaryOperator, position: usize) {
        self.operators
            .push(StackEntry::Operator(Operator::Unary { op, position }));
    }

    pub(crate) fn push_binary(&mut self, op: BinaryOperator, position: usize) -> ParseResult<()> {
        let precedence = op.precedence();
        let right_associative = op.is_right_associative();

        while let Some(top) = self.pop_operator_if(|top| {
                                      if right_associative {
                                          precedence < top.precedence()
                                      } else {
                                          precedence <= top.precedence()
                                      }
                                  })
        {
            self.reduce(top)?;
        }

        self.operators
            .push(StackEntry::Operator(Operator::Binary { op, position }));
        Ok(())
    }

    /// Handles a comma: an argument separator directly inside a call, the
    /// sequencing operator anywhere else.
    ///
    /// Every argument before a separator must be exactly one operand.
    pub(crate) fn comma(&mut self, position: usize) -> ParseResult<()> {
        while let Some(top) = self.pop_operator_if(|_| true) {
            self.reduce(top)?;
        }

        if let Some(StackEntry::Group(Group { call: Some(call),
                                              base,
                                              separators,
                                              .. })) = self.operators.last_mut()
        {
            if self.output.len() != *base + *separators + 1 {
                return Err(ParseError::invalid_expression(format!("misplaced ',' in call to \
                                                                   '{}'",
                                                                  call.name()),
                                                          position));
            }
            *separators += 1;
        } else {
            self.operators
                .push(StackEntry::Operator(Operator::Sequence { position }));
        }

        Ok(())
    }

    /// Reduces everything back to the innermost open group, closes it, and
    /// finishes the call it belongs to, if any.
    pub(crate) fn close_group(&mut self, closing: &Token, position: usize) -> ParseResult<()> {
        loop {
            match self.operators.pop() {
                None => {
                    return Err(ParseError::invalid_brackets(format!("unmatched '{closing}'"),
                                                            position));
                },
                Some(StackEntry::Operator(operator)) => self.reduce(operator)?,
                Some(StackEntry::Group(group)) => {
                    self.floors.pop();
                    let closed = self.finish_group(group, closing, position)?;
                    self.output.push(closed);
                    return Ok(());
                },
            }
        }
    }

    fn finish_group(&mut self,
                    group: Group,
                    closing: &Token,
                    position: usize)
                    -> ParseResult<Expr> {
        if group.bracket.closing_bracket().as_ref() != Some(closing) {
            return Err(ParseError::invalid_brackets(format!("'{closing}' does not match '{}'",
                                                            group.bracket),
                                                    position));
        }

        let operands = self.output.split_off(group.base);

        let Some(call) = group.call else {
            return match <[Expr; 1]>::try_from(operands) {
                Ok([operand]) => Ok(operand),
                Err(operands) if operands.is_empty() => {
                    Err(ParseError::invalid_expression("empty brackets", group.position))
                },
                Err(_) => Err(ParseError::invalid_expression("missing operator between operands",
                                                             group.position)),
            };
        };

        let well_formed = operands.len() == group.separators + 1
                          || (operands.is_empty() && group.separators == 0);
        if !well_formed {
            return Err(ParseError::invalid_expression(format!("malformed argument list in call to \
                                                               '{}'",
                                                              call.name()),
                                                      group.position));
        }

        call.finish(operands, group.position)
    }

    /// Drains the operator stack and returns the single remaining operand.
    pub(crate) fn finish(mut self, end: usize) -> ParseResult<Expr> {
        let unclosed = self.operators.iter().find_map(|entry| match entry {
                                                StackEntry::Group(group) => Some(group),
                                                StackEntry::Operator(_) => None,
                                            });
        if let Some(group) = unclosed {
            return Err(ParseError::invalid_brackets(format!("unclosed '{}'", group.bracket),
                                                    group.position));
        }

        while let Some(StackEntry::Operator(operator)) = self.operators.pop() {
            self.reduce(operator)?;
        }

        match <[Expr; 1]>::try_from(self.output) {
            Ok([expr]) => Ok(expr),
            Err(output) if output.is_empty() => {
                Err(ParseError::invalid_expression("missing operand", end))
            },
            Err(_) => Err(ParseError::invalid_expression("missing operator between operands", end)),
        }
    }

    /// Pops the top of the operator stack if it is an operator satisfying
    /// `condition`. Groups are never popped.
    fn pop_operator_if(&mut self, condition: impl Fn(&Operator) -> bool) -> Option<Operator> {
        match self.operators.last() {
            Some(StackEntry::Operator(top)) if condition(top) => {},
            _ => return None,
        }

        match self.operators.pop() {
            Some(StackEntry::Operator(top)) => Some(top),
            _ => None,
        }
    }

    /// Pops the operands of `operator` and pushes the combined node.
    fn reduce(&mut self, operator: Operator) -> ParseResult<()> {
        let reduced = match operator {
            Operator::Unary { op, position } => {
                let operand = self.take_operand(&op.to_string(), position)?;
                Expr::Unary { op,
                              operand: Box::new(operand) }
            },
            Operator::Binary { op, position } => {
                let right = self.take_operand(&op.to_string(), position)?;
                let left = self.take_operand(&op.to_string(), position)?;
                Expr::Binary { op,
                               left: Box::new(left),
                               right: Box::new(right) }
            },
            Operator::Sequence { position } => {
                let then = self.take_operand(",", position)?;
                let first = self.take_operand(",", position)?;
                Expr::Sequence { first: Box::new(first),
                                 then:  Box::new(then), }
            },
        };

        self.output.push(reduced);
        Ok(())
    }

    /// Pops one operand, refusing to reach below the innermost open group.
    fn take_operand(&mut self, symbol: &str, position: usize) -> ParseResult<Expr> {
        let floor = self.floors.last().copied().unwrap_or(0);

        if self.output.len() > floor
           && let Some(operand) = self.output.pop()
        {
            return Ok(operand);
        }

        Err(ParseError::invalid_expression(format!("missing operand for '{symbol}'"), position))
    }
}
