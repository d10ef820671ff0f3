//! `fixgen format` and `fixgen encode` — single-value inspection commands.

use fixgen_fixed::{derive_format, encode, FixedError, RoundMode, Signedness};

use crate::{EncodeArgs, FormatArgs};

/// Runs `fixgen format`: derives a format and shows the value encoded in it.
pub fn run_format(args: &FormatArgs) -> Result<i32, Box<dyn std::error::Error>> {
    print!("{}", describe_format(args)?);
    Ok(0)
}

/// Runs `fixgen encode`: prints the bit string of an integer.
pub fn run_encode(args: &EncodeArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let bits = encode(args.value, args.width, Signedness::from_signed(args.signed))?;
    println!("{bits}");
    Ok(0)
}

/// Builds the report printed by `fixgen format`.
fn describe_format(args: &FormatArgs) -> Result<String, FixedError> {
    let signedness = if args.unsigned {
        Signedness::Unsigned
    } else {
        Signedness::Signed
    };
    let format = derive_format(args.value, args.resolution, signedness)?;
    let fixed = format.to_fixed(args.value, RoundMode::from(args.mode))?;
    let bits = encode(fixed, format.width, signedness)?;

    let mut out = String::new();
    out.push_str(&format!("format:     {format}\n"));
    out.push_str(&format!("width:      {}\n", format.width));
    out.push_str(&format!("point:      {}\n", format.point));
    out.push_str(&format!("resolution: {:e}\n", format.resolution()));
    out.push_str(&format!("range:      [{}, {}]\n", format.min(), format.max()));
    out.push_str(&format!("fixed:      {fixed} ({})\n", format.to_real(fixed)));
    out.push_str(&format!("bits:       {bits}\n"));
    Ok(out)
}
