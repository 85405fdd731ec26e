#[cfg(test)]
#[path = "../../tests/unit/common/token_reader_test.rs"]
mod token_reader_test;

use daa_core::models::{Cost, Weight};
use daa_core::prelude::GenericError;
use std::fmt::Display;
use std::io::{BufReader, Read};
use std::str::FromStr;

/// A token used for a missing edge in matrix based formats.
pub(crate) const MISSING_TOKEN: &str = "-";

/// Reads whitespace separated tokens one by one.
pub(crate) struct TokenReader {
    tokens: Vec<String>,
    position: usize,
}

impl TokenReader {
    pub fn new<R: Read>(mut reader: BufReader<R>) -> Result<Self, GenericError> {
        let mut buffer = String::new();
        reader.read_to_string(&mut buffer).map_err(|err| format!("cannot read input: '{err}'"))?;

        Ok(Self { tokens: buffer.split_whitespace().map(|token| token.to_string()).collect(), position: 0 })
    }

    /// Returns amount of tokens which are not read yet.
    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.position
    }

    pub fn next_token(&mut self, description: &str) -> Result<String, GenericError> {
        let token = self
            .tokens
            .get(self.position)
            .cloned()
            .ok_or_else(|| GenericError::from(format!("unexpected end of input, expecting {description}")))?;

        self.position += 1;

        Ok(token)
    }

    pub fn next_value<T>(&mut self, description: &str) -> Result<T, GenericError>
    where
        T: FromStr,
        T::Err: Display,
    {
        let token = self.next_token(description)?;

        token.parse::<T>().map_err(|err| format!("cannot parse {description} from '{token}': '{err}'").into())
    }

    /// Reads a weight: an integer or the missing edge token.
    pub fn next_weight(&mut self, description: &str) -> Result<Weight, GenericError> {
        let token = self.next_token(description)?;

        if token == MISSING_TOKEN {
            return Ok(Weight::Infinite);
        }

        token
            .parse::<Cost>()
            .map(Weight::Finite)
            .map_err(|err| format!("cannot parse {description} from '{token}': '{err}'").into())
    }

    /// Fails if some tokens are left unread.
    pub fn expect_end(&self) -> Result<(), GenericError> {
        match self.tokens.get(self.position) {
            Some(token) => Err(format!("unexpected trailing data starting at '{token}'").into()),
            None => Ok(()),
        }
    }
}
