use crate::pauli::{Pauli, PauliString};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("empty Hamiltonian input")]
    Empty,
    #[error("term {0:?}: expected sign, coefficient and Pauli tokens")]
    TruncatedTerm(String),
    #[error("term {term:?}: invalid sign {sign:?} (expected + or -)")]
    BadSign { term: String, sign: String },
    #[error("term {term:?}: invalid coefficient {value:?}")]
    BadCoefficient { term: String, value: String },
    #[error("term {term:?}: invalid Pauli token {token:?}")]
    BadPauli { term: String, token: String },
    #[error("term {term:?}: qubit {qubit} appears more than once")]
    DuplicateQubit { term: String, qubit: usize },
}

/// One weighted Pauli product.
#[derive(Clone, Debug)]
pub struct Term {
    pub coeff: f64,
    pub ops: PauliString,
}

/// Hamiltonian as a sum of weighted Pauli strings.
#[derive(Clone, Debug)]
pub struct Hamiltonian {
    terms: Vec<Term>,
    n_qubits: usize,
}

impl Hamiltonian {
    pub fn new(terms: Vec<Term>) -> Self {
        let n_qubits = terms
            .iter()
            .filter_map(|t| t.ops.max_qubit())
            .max()
            .map_or(1, |q| q + 1);
        Self { terms, n_qubits }
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn n_qubits(&self) -> usize {
        self.n_qubits
    }

    /// Parse the textual Pauli-sum format.
    ///
    /// Each record is `<sign> <coefficient> <token>...` with tokens `I`
    /// or `X`/`Y`/`Z` followed by a qubit index, e.g. `- 0.5 Z0 Z1`.
    /// Records are separated by newlines or by a literal `S`; no valid
    /// token contains either, so both input styles are accepted.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut terms = Vec::new();

        for record in input.split(['\n', 'S']) {
            let record = record.trim();
            if record.is_empty() {
                continue;
            }
            terms.push(parse_term(record)?);
        }

        if terms.is_empty() {
            return Err(ParseError::Empty);
        }
        Ok(Self::new(terms))
    }
}

fn parse_term(record: &str) -> Result<Term, ParseError> {
    let tokens: Vec<&str> = record.split_whitespace().collect();
    if tokens.len() < 3 {
        return Err(ParseError::TruncatedTerm(record.to_string()));
    }

    let sign = match tokens[0] {
        "+" => 1.0,
        "-" => -1.0,
        other => {
            return Err(ParseError::BadSign {
                term: record.to_string(),
                sign: other.to_string(),
            })
        }
    };

    let value: f64 = tokens[1].parse().map_err(|_| ParseError::BadCoefficient {
        term: record.to_string(),
        value: tokens[1].to_string(),
    })?;

    let mut factors = Vec::new();
    for token in &tokens[2..] {
        if *token == "I" {
            continue;
        }
        let pauli = match token.chars().next() {
            Some('X') => Pauli::X,
            Some('Y') => Pauli::Y,
            Some('Z') => Pauli::Z,
            _ => {
                return Err(ParseError::BadPauli {
                    term: record.to_string(),
                    token: token.to_string(),
                })
            }
        };
        let qubit: usize = token[1..].parse().map_err(|_| ParseError::BadPauli {
            term: record.to_string(),
            token: token.to_string(),
        })?;

        if factors.iter().any(|&(q, _)| q == qubit) {
            return Err(ParseError::DuplicateQubit {
                term: record.to_string(),
                qubit,
            });
        }
        factors.push((qubit, pauli));
    }

    Ok(Term {
        coeff: sign * value,
        ops: PauliString::new(factors),
    })
}
