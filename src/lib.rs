pub mod encoder;

use itertools::Itertools;

pub use encoder::{Encoder, Gsm, NotEncodable, Scheme, Utf16, GSM_NAME, UTF16_NAME};

pub fn smscode(
    argv: impl IntoIterator<Item = std::ffi::OsString>,
) -> Result<(), Box<dyn std::error::Error>> {
    let argv: Vec<_> = argv.into_iter().collect();
    if argv.is_empty() {
        eprintln!("Not enough arguments. Usage: smscode [text...]");
        return Err(std::io::Error::from(std::io::ErrorKind::InvalidInput).into());
    }
    for argument in argv.iter() {
        match argument.to_str() {
            Some(text) => println!("{}", describe(text)),
            None => println!("{}: not valid Unicode", argument.to_string_lossy()),
        }
    }
    Ok(())
}

fn describe(text: &str) -> String {
    let scheme = Scheme::for_text(text);
    let costs = text
        .chars()
        .filter_map(|c| scheme.code_points(c).ok())
        .join(" ");
    format!(
        "{text}: {} ({}-bit), code points: {costs}",
        scheme.name(),
        scheme.code_point_bits()
    )
}
