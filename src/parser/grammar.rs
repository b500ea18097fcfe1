// # ========================= START OF THE GRAMMAR =========================
//
// # One function per production. The comment above each function quotes the
// # production it recognizes:
// #
// # * Strings with single quotes (':') denote literal tokens
// # * Upper case names (NAME) denote token types from the tokenizer
// # * e1 | e2 matches e1 or e2, alternatives tried in the order given
// # * [ e ] optionally matches e
// # * e* matches zero or more occurrences of e
// # * s.e+ matches one or more occurrences of e, separated by s
// # * !e fails if e can be parsed, without consuming any input
//
// # No syntax tree is built; every rule reduces to () and the only question
// # answered is whether the whole token sequence forms one statement.

use super::combinators::*;
use super::tokenizer::{Token, TokenType as TT};

pub fn parse(input: &[Token]) -> ParseResult<()> {
    left(statement, end_of_input).parse(input)
}

// # STATEMENTS
// # ==========

// statement:
//     | assignment
//     | while_loop
//     | for_loop
//     | function_declaration
//     | list_declaration
//     | if_statement
//     | print_statement
fn statement(input: &[Token]) -> ParseResult<()> {
    assignment
        .or(while_loop)
        .or(for_loop)
        .or(function_declaration)
        .or(list_declaration)
        .or(if_statement)
        .or(print_statement)
        .parse(input)
}

// assignment:
//     | NAME '=' !sole_group expression
// A right-hand side that is nothing but one parenthesized group is a tuple
// display with too few items (tuples take two or more), not an expression.
fn assignment(input: &[Token]) -> ParseResult<()> {
    right(
        pair(tok(TT::NAME), tok(TT::EQUAL)),
        right(not(sole_group), expression),
    )
    .parse(input)
}

// sole_group: group !binary_operator
fn sole_group(input: &[Token]) -> ParseResult<()> {
    left(group, not(binary_operator)).parse(input)
}

// while_loop:
//     | 'while' expression ':' statement
fn while_loop(input: &[Token]) -> ParseResult<()> {
    right(
        tok(TT::WHILE),
        pair(left(expression, tok(TT::COLON)), statement),
    )
    .discard()
    .parse(input)
}

// for_loop:
//     | 'for' NAME 'in' expression ':' statement
//     | 'for' NAME 'in' expression ':'
fn for_loop(input: &[Token]) -> ParseResult<()> {
    right(
        pair(tok(TT::FOR), left(tok(TT::NAME), tok(TT::IN))),
        pair(left(expression, tok(TT::COLON)), maybe(statement)),
    )
    .discard()
    .parse(input)
}

// function_declaration:
//     | 'def' NAME '(' NAME ',' NAME ')' ':' statement 'return' expression
//     | 'def' NAME '(' NAME ',' NAME ')' ':' statement
//     | 'def' NAME '(' assignment ',' assignment ')' ':' statement 'return' expression
// Arity is fixed at two, and the defaulted-parameter form demands the
// return clause.
fn function_declaration(input: &[Token]) -> ParseResult<()> {
    pair(
        right(
            pair(tok(TT::DEF), tok(TT::NAME)),
            right(
                tok(TT::LPAR),
                left(parameters, pair(tok(TT::RPAR), tok(TT::COLON))),
            ),
        ),
        pair(statement, maybe(return_clause)),
    )
    .discard()
    .or(pair(
        right(
            pair(tok(TT::DEF), tok(TT::NAME)),
            right(
                tok(TT::LPAR),
                left(defaulted_parameters, pair(tok(TT::RPAR), tok(TT::COLON))),
            ),
        ),
        pair(statement, return_clause),
    )
    .discard())
    .parse(input)
}

// parameters: NAME ',' NAME
fn parameters(input: &[Token]) -> ParseResult<()> {
    pair(left(tok(TT::NAME), tok(TT::COMMA)), tok(TT::NAME))
        .discard()
        .parse(input)
}

// defaulted_parameters: assignment ',' assignment
fn defaulted_parameters(input: &[Token]) -> ParseResult<()> {
    pair(left(assignment, tok(TT::COMMA)), assignment)
        .discard()
        .parse(input)
}

// return_clause: 'return' expression
fn return_clause(input: &[Token]) -> ParseResult<()> {
    right(tok(TT::RETURN), expression).parse(input)
}

// list_declaration:
//     | NAME '=' '[' list_items ']'
//     | NAME '=' '{' dict_items '}'
//     | NAME '=' '(' tuple_items ')'
fn list_declaration(input: &[Token]) -> ParseResult<()> {
    right(
        pair(tok(TT::NAME), tok(TT::EQUAL)),
        right(tok(TT::LSQB), left(list_items, tok(TT::RSQB)))
            .or(right(tok(TT::LBRACE), left(dict_items, tok(TT::RBRACE))))
            .or(right(tok(TT::LPAR), left(tuple_items, tok(TT::RPAR)))),
    )
    .parse(input)
}

// list_items:
//     | ','.expression+
fn list_items(input: &[Token]) -> ParseResult<()> {
    sep_by(expression, TT::COMMA).discard().parse(input)
}

// dict_items:
//     | ','.key_value+
fn dict_items(input: &[Token]) -> ParseResult<()> {
    sep_by(key_value, TT::COMMA).discard().parse(input)
}

// key_value: expression ':' expression
fn key_value(input: &[Token]) -> ParseResult<()> {
    pair(left(expression, tok(TT::COLON)), expression)
        .discard()
        .parse(input)
}

// tuple_items: expression ',' ','.expression+
fn tuple_items(input: &[Token]) -> ParseResult<()> {
    pair(
        left(expression, tok(TT::COMMA)),
        sep_by(expression, TT::COMMA),
    )
    .discard()
    .parse(input)
}

// if_statement:
//     | 'if' expression ':' statement [else_statement]
fn if_statement(input: &[Token]) -> ParseResult<()> {
    right(
        tok(TT::IF),
        pair(
            left(expression, tok(TT::COLON)),
            pair(statement, maybe(else_statement)),
        ),
    )
    .discard()
    .parse(input)
}

// else_statement: 'else' ':' statement
fn else_statement(input: &[Token]) -> ParseResult<()> {
    right(pair(tok(TT::ELSE), tok(TT::COLON)), statement).parse(input)
}

// print_statement:
//     | 'print' '(' STRING ')'
// The restricted print form takes a single string literal, nothing else.
fn print_statement(input: &[Token]) -> ParseResult<()> {
    right(
        pair(tok(TT::PRINT), tok(TT::LPAR)),
        left(tok(TT::STRING), tok(TT::RPAR)),
    )
    .discard()
    .parse(input)
}

// # EXPRESSIONS
// # ===========

// # The rule layering encodes the binding order: comparisons bind loosest,
// # then sums, then terms, then power, which associates to the right.

// expression:
//     | comparison
fn expression(input: &[Token]) -> ParseResult<()> {
    comparison.parse(input)
}

// comparison:
//     | sum (comparison_operator sum)*
fn comparison(input: &[Token]) -> ParseResult<()> {
    pair(sum, zero_or_more(pair(comparison_operator, sum)))
        .discard()
        .parse(input)
}

// comparison_operator: '==' | '!=' | '<' | '<=' | '>' | '>='
fn comparison_operator(input: &[Token]) -> ParseResult<Token> {
    tok(TT::EQEQUAL)
        .or(tok(TT::NOTEQUAL))
        .or(tok(TT::LESS))
        .or(tok(TT::LESSEQUAL))
        .or(tok(TT::GREATER))
        .or(tok(TT::GREATEREQUAL))
        .parse(input)
}

// binary_operator: any operator that can extend a finished operand into a
// larger expression
fn binary_operator(input: &[Token]) -> ParseResult<Token> {
    tok(TT::PLUS)
        .or(tok(TT::MINUS))
        .or(tok(TT::STAR))
        .or(tok(TT::SLASH))
        .or(tok(TT::DOUBLESLASH))
        .or(tok(TT::PERCENT))
        .or(tok(TT::DOUBLESTAR))
        .or(comparison_operator)
        .parse(input)
}

// sum:
//     | term (('+' | '-') term)*
fn sum(input: &[Token]) -> ParseResult<()> {
    pair(
        term,
        zero_or_more(pair(tok(TT::PLUS).or(tok(TT::MINUS)), term)),
    )
    .discard()
    .parse(input)
}

// term:
//     | power (('*' | '/' | '//' | '%') power)*
fn term(input: &[Token]) -> ParseResult<()> {
    pair(
        power,
        zero_or_more(pair(
            tok(TT::STAR)
                .or(tok(TT::SLASH))
                .or(tok(TT::DOUBLESLASH))
                .or(tok(TT::PERCENT)),
            power,
        )),
    )
    .discard()
    .parse(input)
}

// power:
//     | primary '**' power
//     | primary
fn power(input: &[Token]) -> ParseResult<()> {
    pair(primary, right(tok(TT::DOUBLESTAR), power))
        .discard()
        .or(primary)
        .parse(input)
}

// primary:
//     | NAME '(' call_arguments ')'
//     | NAME
//     | NUMBER
//     | group
fn primary(input: &[Token]) -> ParseResult<()> {
    right(
        pair(tok(TT::NAME), tok(TT::LPAR)),
        left(call_arguments, tok(TT::RPAR)),
    )
    .discard()
    .or(tok(TT::NAME).discard())
    .or(tok(TT::NUMBER).discard())
    .or(group)
    .parse(input)
}

// call_arguments:
//     | ','.expression+
fn call_arguments(input: &[Token]) -> ParseResult<()> {
    sep_by(expression, TT::COMMA).discard().parse(input)
}

// group:
//     | '(' expression ')'
fn group(input: &[Token]) -> ParseResult<()> {
    right(tok(TT::LPAR), left(expression, tok(TT::RPAR))).parse(input)
}
