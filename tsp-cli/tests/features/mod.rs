//! Feature tests which drive the whole pipeline from a problem file to the result.
