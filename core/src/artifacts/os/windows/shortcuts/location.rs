use super::error::ShortcutError;
use crate::utils::nom_helper::{Endian, nom_data, nom_unsigned_four_bytes};
use crate::utils::strings::extract_codepage_string;
use log::error;
use nom::bytes::complete::take_while;

#[derive(Debug)]
pub(crate) struct LinkInfo {
    /// Local base path concatenated with the common path suffix
    pub(crate) target_path: String,
    /// Absolute offset one past the LinkInfo block. StringData begins here
    pub(crate) block_end: usize,
}

impl LinkInfo {
    /// Parse the LinkInfo block beginning at `start`. Path offsets stored in the
    /// block are relative to `start`, not the file start
    pub(crate) fn parse_info(data: &[u8], start: usize) -> Result<LinkInfo, ShortcutError> {
        let fields_result = LinkInfo::info_fields(data, start);
        let (size, local_offset, common_offset) = match fields_result {
            Ok((_, results)) => results,
            Err(_err) => {
                error!("[shortcuts] Buffer ended inside the LinkInfo block fields");
                return Err(ShortcutError::TruncatedBuffer);
            }
        };

        let block_end = start + size as usize;
        if block_end > data.len() {
            error!("[shortcuts] LinkInfo length {size} runs past the end of the buffer");
            return Err(ShortcutError::InvalidLength);
        }

        let local_path = LinkInfo::path_fragment(data, start, local_offset as usize, block_end)?;
        let common_path = LinkInfo::path_fragment(data, start, common_offset as usize, block_end)?;

        // Target is always local + common, even when one side is empty
        let info = LinkInfo {
            target_path: format!("{local_path}{common_path}"),
            block_end,
        };
        Ok(info)
    }

    /// Nom the LinkInfo size and the two path offsets. The local base path
    /// offset sits at block start + 16, the common path suffix offset at + 24
    fn info_fields(data: &[u8], start: usize) -> nom::IResult<&[u8], (u32, u32, u32)> {
        let (block, _) = nom_data(data, start as u64)?;
        let (input, size) = nom_unsigned_four_bytes(block, Endian::Le)?;

        // Skip header size, flags, and the volume ID offset. None are consumed
        let sub_header_size = 12;
        let (input, _) = nom_data(input, sub_header_size)?;
        let (input, local_offset) = nom_unsigned_four_bytes(input, Endian::Le)?;
        let (input, _network_share_offset) = nom_unsigned_four_bytes(input, Endian::Le)?;
        let (input, common_offset) = nom_unsigned_four_bytes(input, Endian::Le)?;

        Ok((input, (size, local_offset, common_offset)))
    }

    /// Read the NUL-terminated byte run at `offset` relative to the block start,
    /// bounded by the end of the block, and decode it with the legacy codepage
    fn path_fragment(
        data: &[u8],
        start: usize,
        offset: usize,
        block_end: usize,
    ) -> Result<String, ShortcutError> {
        let position = start + offset;
        if position > block_end {
            error!("[shortcuts] Path offset {offset} points outside the LinkInfo block");
            return Err(ShortcutError::InvalidLength);
        }

        // Both bounds were checked against the buffer above
        let run = &data[position..block_end];
        let fragment_result: nom::IResult<&[u8], &[u8]> = take_while(|b| b != 0)(run);
        match fragment_result {
            Ok((_, fragment)) => Ok(extract_codepage_string(fragment)),
            Err(_err) => {
                error!("[shortcuts] Could not read path fragment at offset {offset}");
                Err(ShortcutError::TruncatedBuffer)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LinkInfo;
    use crate::artifacts::os::windows::shortcuts::error::ShortcutError;

    fn build_block(local: &[u8], common: &[u8]) -> Vec<u8> {
        let local_offset = 28u32;
        let common_offset = local_offset + local.len() as u32 + 1;
        let size = common_offset + common.len() as u32 + 1;

        let mut block = Vec::new();
        block.extend(size.to_le_bytes());
        block.extend(28u32.to_le_bytes()); // header size
        block.extend(1u32.to_le_bytes()); // volume id and local base path
        block.extend(0u32.to_le_bytes()); // volume id offset
        block.extend(local_offset.to_le_bytes());
        block.extend(0u32.to_le_bytes()); // network share offset
        block.extend(common_offset.to_le_bytes());
        block.extend(local);
        block.push(0);
        block.extend(common);
        block.push(0);
        block
    }

    #[test]
    fn test_parse_info() {
        let block = build_block(b"C:\\Users\\bob\\Projects", b"\\notes");
        let result = LinkInfo::parse_info(&block, 0).unwrap();
        assert_eq!(result.target_path, "C:\\Users\\bob\\Projects\\notes");
        assert_eq!(result.block_end, block.len());
    }

    #[test]
    fn test_parse_info_empty_common_path() {
        let block = build_block(b"C:\\Tools\\app.exe", b"");
        let result = LinkInfo::parse_info(&block, 0).unwrap();
        assert_eq!(result.target_path, "C:\\Tools\\app.exe");
    }

    #[test]
    fn test_parse_info_nonzero_start() {
        let padding = 70;
        let mut data = vec![0; padding];
        data.extend(build_block(b"C:\\Tools\\app.exe", b""));
        let result = LinkInfo::parse_info(&data, padding).unwrap();
        assert_eq!(result.target_path, "C:\\Tools\\app.exe");
        assert_eq!(result.block_end, data.len());
    }

    #[test]
    fn test_parse_info_bad_size() {
        let mut block = build_block(b"C:\\Tools\\app.exe", b"");
        // Declare a block length far past the end of the buffer
        block[0..4].copy_from_slice(&5000u32.to_le_bytes());
        let result = LinkInfo::parse_info(&block, 0);
        assert_eq!(result.unwrap_err(), ShortcutError::InvalidLength);
    }

    #[test]
    fn test_parse_info_bad_path_offset() {
        let mut block = build_block(b"C:\\Tools\\app.exe", b"");
        // Point the local base path offset past the block
        block[16..20].copy_from_slice(&4000u32.to_le_bytes());
        let result = LinkInfo::parse_info(&block, 0);
        assert_eq!(result.unwrap_err(), ShortcutError::InvalidLength);
    }

    #[test]
    fn test_parse_info_truncated() {
        let block = build_block(b"C:\\Tools\\app.exe", b"");
        let result = LinkInfo::parse_info(&block[..20], 0);
        assert_eq!(result.unwrap_err(), ShortcutError::TruncatedBuffer);
    }
}
