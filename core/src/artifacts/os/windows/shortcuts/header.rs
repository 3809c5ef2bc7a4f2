use crate::utils::nom_helper::{Endian, nom_unsigned_four_bytes};
use common::windows::LinkFlags;
use nom::bytes::complete::take;

/**Every shortcut header begins with this size value (76 bytes) */
const HEADER_SIZE: u32 = 0x4c;
/**Class ID 00021401-0000-0000-c000-000000000046 in its on-disk byte order */
const CLASS_ID: [u8; 16] = [
    0x01, 0x14, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0xc0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x46,
];

/**Fixed offset of the LinkFlags value */
const FLAGS_OFFSET: usize = 0x14;

pub(crate) struct LnkHeader;

impl LnkHeader {
    /// Verify provided bytes begin with a `shortcut` header
    pub(crate) fn check_header(data: &[u8]) -> nom::IResult<&[u8], bool> {
        let (input, size) = nom_unsigned_four_bytes(data, Endian::Le)?;
        let (_, class_id) = take(CLASS_ID.len())(input)?;

        Ok((data, size == HEADER_SIZE && class_id == CLASS_ID))
    }

    /// Read the LinkFlags value at its fixed header offset
    pub(crate) fn parse_flags(data: &[u8]) -> nom::IResult<&[u8], Vec<LinkFlags>> {
        let (input, _) = take(FLAGS_OFFSET)(data)?;
        let (input, flag_value) = nom_unsigned_four_bytes(input, Endian::Le)?;

        Ok((input, LnkHeader::get_flags(&flag_value)))
    }

    /// Split the LinkFlags bit-field into the flags this decoder models. Higher bits are ignored
    fn get_flags(flags: &u32) -> Vec<LinkFlags> {
        let mut link_flags: Vec<LinkFlags> = Vec::new();

        let has_target_id_list = 0x1;
        let has_link_info = 0x2;
        let has_name = 0x4;
        let has_relative_path = 0x8;
        let has_working_directory = 0x10;
        let has_arguments = 0x20;
        let has_icon_location = 0x40;
        let is_unicode = 0x80;

        // A shortcut file may have multiple flags
        if (flags & has_target_id_list) == has_target_id_list {
            link_flags.push(LinkFlags::HasTargetIdList);
        }
        if (flags & has_link_info) == has_link_info {
            link_flags.push(LinkFlags::HasLinkInfo);
        }
        if (flags & has_name) == has_name {
            link_flags.push(LinkFlags::HasName);
        }
        if (flags & has_relative_path) == has_relative_path {
            link_flags.push(LinkFlags::HasRelativePath);
        }
        if (flags & has_working_directory) == has_working_directory {
            link_flags.push(LinkFlags::HasWorkingDirectory);
        }
        if (flags & has_arguments) == has_arguments {
            link_flags.push(LinkFlags::HasArguments);
        }
        if (flags & has_icon_location) == has_icon_location {
            link_flags.push(LinkFlags::HasIconLocation);
        }
        if (flags & is_unicode) == is_unicode {
            link_flags.push(LinkFlags::IsUnicode);
        }

        link_flags
    }
}
