//! Turning raw command-line tokens into a typed sample.

/// Values typed on the command line.
///
/// If every token is an integer the sample compares numerically, otherwise
/// all tokens compare as text. An empty token list is an empty integer
/// sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sample {
    Integers(Vec<i64>),
    Words(Vec<String>),
}

impl Sample {
    pub fn parse(tokens: &[String]) -> Self {
        let trimmed: Vec<&str> = tokens.iter().map(|t| t.trim()).collect();

        match trimmed
            .iter()
            .map(|t| t.parse::<i64>())
            .collect::<Result<Vec<_>, _>>()
        {
            Ok(numbers) => Self::Integers(numbers),
            Err(_) => Self::Words(trimmed.into_iter().map(str::to_string).collect()),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Integers(values) => values.len(),
            Self::Words(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Integers(_) => "integers",
            Self::Words(_) => "words",
        }
    }
}

/// Evaluate an expression against the sample's slice, whatever its element type.
#[macro_export]
macro_rules! with_sample {
    ($sample:expr, $items:ident => $body:expr) => {
        match $sample {
            $crate::cli::Sample::Integers($items) => $body,
            $crate::cli::Sample::Words($items) => $body,
        }
    };
}
