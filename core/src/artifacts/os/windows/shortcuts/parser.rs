/**
 * Windows `Shortcut` files (`lnk`) point at another file. This decoder pulls
 * out the resolved execution target and the optional StringData values
 * (description, relative path, working directory, command-line arguments).
 *
 * References:
 * `https://github.com/libyal/liblnk/blob/main/documentation/Windows%20Shortcut%20File%20(LNK)%20format.asciidoc`
 * `https://winprotocoldoc.blob.core.windows.net/productionwindowsarchives/MS-SHLLINK/%5bMS-SHLLINK%5d.pdf`
 *
 * Any read outside the buffer or over-declared length aborts the decode with a
 * typed error. Partial results are never returned
 */
use super::error::ShortcutError;
use super::header::LnkHeader;
use super::location::LinkInfo;
use super::strings::{STRING_DATA_ORDER, extract_string};
use crate::filesystem::files::read_file;
use crate::utils::nom_helper::{Endian, nom_data, nom_unsigned_two_bytes};
use common::windows::{LinkFlags, ParsedShortcut};
use log::error;
use std::collections::HashMap;

/// Decode a single `shortcut` file at the provided path
pub fn decode_lnk_file(path: &str) -> Result<ParsedShortcut, ShortcutError> {
    let read_result = read_file(path);
    let data = match read_result {
        Ok(results) => results,
        Err(err) => {
            error!("[shortcuts] Could not read lnk file {path}: {err:?}");
            return Err(ShortcutError::ReadFile);
        }
    };
    decode_lnk_data(&data)
}

/// Decode raw `shortcut` bytes into the target path and optional StringData values
pub fn decode_lnk_data(data: &[u8]) -> Result<ParsedShortcut, ShortcutError> {
    let header_result = LnkHeader::check_header(data);
    let is_shortcut = match header_result {
        Ok((_, results)) => results,
        Err(_err) => {
            error!("[shortcuts] Buffer too small for a shortcut header");
            return Err(ShortcutError::TruncatedBuffer);
        }
    };
    if !is_shortcut {
        return Err(ShortcutError::NotShortcutData);
    }

    let flags_result = LnkHeader::parse_flags(data);
    let (_, flags) = match flags_result {
        Ok(results) => results,
        Err(_err) => {
            error!("[shortcuts] Buffer ended before the LinkFlags value");
            return Err(ShortcutError::TruncatedBuffer);
        }
    };

    let start = link_info_start(data, &flags)?;
    let info = LinkInfo::parse_info(data, start)?;

    // StringData immediately follows the LinkInfo block
    let is_unicode = flags.contains(&LinkFlags::IsUnicode);
    let mut input = &data[info.block_end..];
    let mut additional_data = HashMap::new();
    for (flag, name) in STRING_DATA_ORDER {
        if !flags.contains(&flag) {
            continue;
        }
        let (remaining_input, value) = extract_string(input, is_unicode)?;
        additional_data.insert(name.to_string(), value);
        input = remaining_input;
    }

    let shortcut = ParsedShortcut {
        target_path: info.target_path,
        additional_data,
    };
    Ok(shortcut)
}

/// The LinkInfo block sits at a fixed offset unless an ID list is stored
/// between it and the header. The ID list size at 0x4C locates the block then
fn link_info_start(data: &[u8], flags: &[LinkFlags]) -> Result<usize, ShortcutError> {
    let fixed_start = 0x18;
    if !flags.contains(&LinkFlags::HasTargetIdList) {
        return Ok(fixed_start);
    }

    let id_list_size_offset = 0x4c;
    let size_result = id_list_size(data, id_list_size_offset);
    match size_result {
        Ok((_, size)) => Ok(size as usize + id_list_size_offset + 2),
        Err(_err) => {
            error!("[shortcuts] Buffer ended before the ID list size");
            Err(ShortcutError::TruncatedBuffer)
        }
    }
}

/// Nom the stored ID list size
fn id_list_size(data: &[u8], offset: usize) -> nom::IResult<&[u8], u16> {
    let (input, _) = nom_data(data, offset as u64)?;
    nom_unsigned_two_bytes(input, Endian::Le)
}
