/// Process exit statuses. 2 is left to clap for usage errors.
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_NO_MATCHES: u8 = 3;
