use anyhow::Error;
use okved_core::PhoneError;

pub const EXIT_FAILURE: u8 = 1;

pub fn phone_error(err: &Error) -> Option<&PhoneError> {
    err.chain().find_map(|cause| cause.downcast_ref::<PhoneError>())
}

pub fn report_error(err: &Error, verbose: bool) {
    if let Some(phone_err) = phone_error(err) {
        eprintln!("normalization error: {}", phone_err);
        return;
    }

    if verbose {
        eprintln!("error: {:?}", err);
    } else {
        eprintln!("error: {:#}", err);
    }
}
