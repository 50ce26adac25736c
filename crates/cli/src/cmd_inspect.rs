use std::process::ExitCode;

use slbc_varna::classify::{column, is_bhasha_control, is_lipi_control, is_reserved, is_varga, place};
use slbc_varna::{is_svara, is_vyanjana};

use crate::exit;
use crate::hex;

pub fn run(byte: Option<&str>, from_hex: Option<&str>) -> ExitCode {
    match (byte, from_hex) {
        (Some(hex_byte), None) => {
            let b = match hex::decode_byte(hex_byte) {
                Ok(b) => b,
                Err(e) => return exit::report(e),
            };
            print_byte(0, b);
            ExitCode::SUCCESS
        }
        (None, Some(hex_seq)) => {
            let bytes = match hex::decode(hex_seq) {
                Ok(b) => b,
                Err(e) => return exit::report(e),
            };
            for (i, b) in bytes.iter().enumerate() {
                print_byte(i, *b);
            }
            ExitCode::SUCCESS
        }
        (None, None) => exit::report("inspect requires either --byte or --from-hex"),
        (Some(_), Some(_)) => unreachable!("clap rejects --byte and --from-hex together"),
    }
}

fn print_byte(offset: usize, byte: u8) {
    let token = slbc_varna::token_for_byte(byte).unwrap_or("-");
    if is_svara(byte) {
        println!("[{offset}] {byte:#04x} svara   token={token}");
    } else if is_varga(byte) {
        println!(
            "[{offset}] {byte:#04x} varga   place={} column={} token={token}",
            place(byte),
            column(byte)
        );
    } else if is_vyanjana(byte) && !is_bhasha_control(byte) && !is_lipi_control(byte) && !is_reserved(byte) {
        println!(
            "[{offset}] {byte:#04x} non-varga place={} column={} token={token}",
            place(byte),
            column(byte)
        );
    } else if is_bhasha_control(byte) {
        println!("[{offset}] {byte:#04x} bhasha-control");
    } else if is_lipi_control(byte) {
        println!("[{offset}] {byte:#04x} lipi-control");
    } else {
        println!("[{offset}] {byte:#04x} reserved");
    }
}
