/*!
Error printer for `main`, showing the full source chain.
*/

use std::error::Error as StdError;

pub struct Report(Box<dyn StdError>);

impl std::fmt::Debug for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.0)?;

        let mut source = self.0.source();
        if source.is_some() {
            writeln!(f, "\nCaused by:")?;
        }

        let mut depth = 0;
        while let Some(e) = source {
            writeln!(f, "  {}: {}", depth, e)?;
            source = e.source();
            depth += 1;
        }

        Ok(())
    }
}

impl<E: Into<Box<dyn StdError>>> From<E> for Report {
    fn from(e: E) -> Self {
        Report(e.into())
    }
}
