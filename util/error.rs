/*!
This module defines the [`Error`](Error) and [`Result`](Result) types used throughout vigil, along with the `err!` macro for producing an error from a format string.
*/

pub struct Error(Box<dyn std::error::Error + Send + Sync + 'static>);

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
	pub fn message(message: String) -> Error {
		Error(message.into())
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl std::fmt::Debug for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.0)
	}
}

impl<E> From<E> for Error
where
	E: std::error::Error + Send + Sync + 'static,
{
	fn from(error: E) -> Error {
		Error(Box::new(error))
	}
}

#[macro_export]
macro_rules! err {
	($($tt:tt)*) => {
		$crate::error::Error::message(format!($($tt)*))
	};
}
