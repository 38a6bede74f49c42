//! OVF descriptor handling.
//!
//! Reads the base MAC address out of the exported descriptor and renames
//! the staged descriptor to the `box.ovf` name Vagrant expects.

use crate::bundler::error::{Error, ErrorExt, Result};
use regex::bytes::Regex;
use std::{
    io,
    path::{Path, PathBuf},
};

/// Extension identifying the descriptor file.
pub const OVF_EXTENSION: &str = ".ovf";

/// Name the descriptor must carry inside a box.
pub const BOX_OVF: &str = "box.ovf";

/// First `<Adapter slot="0" ...>` tag, capturing its `MACAddress` attribute.
/// Stays inside the tag, stepping over quoted values that may contain `>`,
/// and tolerates other attributes and line breaks.
const ADAPTER_MAC: &str =
    r#"<Adapter\s(?:[^>"]|"[^"]*")*?\bslot="0"(?:[^>"]|"[^"]*")*?\bMACAddress="([^"]+)""#;

/// Finds the base MAC address of the VM described by the artifact.
///
/// Only the first `.ovf` file in `files` is considered.
pub fn find_base_mac_address(files: &[PathBuf]) -> Result<String> {
    log::info!("Looking for OVF for base mac address...");

    let ovf = files
        .iter()
        .find(|f| f.to_string_lossy().ends_with(OVF_EXTENSION))
        .ok_or_else(|| Error::NotFound("descriptor file couldn't be found".to_string()))?;
    log::info!("OVF found: {}", ovf.display());

    // Descriptors may declare a non-UTF-8 encoding; only the address is decoded.
    let data = std::fs::read(ovf).fs_context("reading OVF descriptor", ovf)?;
    let mac = parse_base_mac_address(&data)?;

    log::info!("Base mac address: {mac}");
    Ok(mac)
}

/// Extracts the slot-0 adapter's MAC address from raw descriptor bytes.
pub fn parse_base_mac_address(descriptor: impl AsRef<[u8]>) -> Result<String> {
    let re = Regex::new(ADAPTER_MAC)
        .map_err(|e| Error::GenericError(format!("invalid adapter pattern: {e}")))?;

    re.captures(descriptor.as_ref())
        .and_then(|caps| caps.get(1))
        .map(|m| String::from_utf8_lossy(m.as_bytes()).into_owned())
        .ok_or_else(|| Error::Parse("can't find base hardware address in descriptor".to_string()))
}

/// Renames the single `.ovf` in `dir` to `box.ovf`.
///
/// More than one descriptor is an error; so is none.
pub fn rename_ovf(dir: &Path) -> Result<PathBuf> {
    log::info!("Looking for OVF to rename...");

    let pattern = format!(
        "{}/*{}",
        glob::Pattern::escape(&dir.to_string_lossy()),
        OVF_EXTENSION
    );
    let matches = glob::glob(&pattern)
        .map_err(|e| Error::GenericError(format!("invalid OVF glob {pattern}: {e}")))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::Fs {
            context: "scanning staging directory".to_string(),
            path: e.path().to_path_buf(),
            source: e.into_error(),
        })?;

    let source = match matches.as_slice() {
        [single] => single,
        [] => {
            return Err::<PathBuf, _>(io::Error::new(
                io::ErrorKind::NotFound,
                "no OVF file to rename",
            ))
            .fs_context("renaming OVF", dir);
        }
        _ => {
            return Err(Error::AmbiguousArtifact(
                "more than one descriptor file in artifact".to_string(),
            ));
        }
    };

    let target = dir.join(BOX_OVF);
    log::info!("Renaming: '{}' => {BOX_OVF}", source.display());
    std::fs::rename(source, &target).fs_context("renaming OVF", source)?;
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const DESCRIPTOR: &str = r#"<?xml version="1.0"?>
<Envelope ovf:version="1.0">
  <vbox:Machine ovf:required="false" version="1.12-linux" uuid="{b9b8}" name="web">
    <Hardware>
      <Network>
        <Adapter slot="1" enabled="false" MACAddress="080027111111" type="82540EM"/>
        <Adapter slot="0" enabled="true" MACAddress="080027ABCDEF" cable="true" type="82540EM">
          <NAT/>
        </Adapter>
      </Network>
    </Hardware>
  </vbox:Machine>
</Envelope>
"#;

    #[test]
    fn parses_slot_zero_address_verbatim() {
        assert_eq!(parse_base_mac_address(DESCRIPTOR).unwrap(), "080027ABCDEF");
    }

    #[test]
    fn tolerates_attributes_across_lines() {
        let text = "<Adapter\n  slot=\"0\"\n  enabled=\"true\"\n  MACAddress=\"08:00:27:00:00:01\"/>";
        assert_eq!(parse_base_mac_address(text).unwrap(), "08:00:27:00:00:01");
    }

    #[test]
    fn does_not_borrow_address_from_next_tag() {
        let text = r#"<Adapter slot="0" enabled="false"/><Adapter slot="1" MACAddress="0800270000FF"/>"#;
        let err = parse_base_mac_address(text).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn steps_over_quoted_angle_brackets() {
        let text = r#"<Adapter name="nat>bridge" slot="0" MACAddress="080027000002"/>"#;
        assert_eq!(parse_base_mac_address(text).unwrap(), "080027000002");
    }

    #[test]
    fn missing_slot_zero_is_parse_error() {
        let text = r#"<Adapter slot="1" MACAddress="080027111111"/>"#;
        assert!(matches!(parse_base_mac_address(text), Err(Error::Parse(_))));
    }

    #[test]
    fn no_descriptor_is_not_found() {
        let files = vec![PathBuf::from("/tmp/disk.vmdk")];
        let err = find_base_mac_address(&files).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
        assert_eq!(err.to_string(), "descriptor file couldn't be found");
    }

    #[test]
    fn first_descriptor_wins() {
        let temp = TempDir::new().unwrap();
        let first = temp.path().join("a.ovf");
        let second = temp.path().join("b.ovf");
        fs::write(&first, DESCRIPTOR).unwrap();
        fs::write(&second, r#"<Adapter slot="0" MACAddress="0800270000AA"/>"#).unwrap();

        let mac = find_base_mac_address(&[temp.path().join("disk.vmdk"), first, second]).unwrap();
        assert_eq!(mac, "080027ABCDEF");
    }

    #[test]
    fn reads_latin1_descriptor() {
        let temp = TempDir::new().unwrap();
        let ovf = temp.path().join("latin1.ovf");
        let mut bytes = b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>\n<Description>Caf".to_vec();
        bytes.push(0xe9);
        bytes.extend_from_slice(b"</Description>\n<Adapter slot=\"0\" MACAddress=\"080027ABCDEF\"/>\n");
        fs::write(&ovf, bytes).unwrap();

        assert_eq!(find_base_mac_address(&[ovf]).unwrap(), "080027ABCDEF");
    }

    #[test]
    fn unreadable_descriptor_is_io_error() {
        let temp = TempDir::new().unwrap();
        let err = find_base_mac_address(&[temp.path().join("gone.ovf")]).unwrap_err();
        assert!(err.io_error().is_some());
    }

    #[test]
    fn rename_single_descriptor() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("image.ovf"), DESCRIPTOR).unwrap();
        fs::write(temp.path().join("disk.vmdk"), "disk").unwrap();

        let renamed = rename_ovf(temp.path()).unwrap();

        assert_eq!(renamed, temp.path().join("box.ovf"));
        assert!(renamed.exists());
        assert!(!temp.path().join("image.ovf").exists());
        assert!(temp.path().join("disk.vmdk").exists());
    }

    #[test]
    fn rename_rejects_two_descriptors() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.ovf"), "").unwrap();
        fs::write(temp.path().join("b.ovf"), "").unwrap();

        let err = rename_ovf(temp.path()).unwrap_err();
        assert!(matches!(err, Error::AmbiguousArtifact(_)));
        assert!(temp.path().join("a.ovf").exists());
    }

    #[test]
    fn rename_without_descriptor_surfaces_io_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("disk.vmdk"), "disk").unwrap();

        let err = rename_ovf(temp.path()).unwrap_err();
        assert_eq!(
            err.io_error().map(io::Error::kind),
            Some(io::ErrorKind::NotFound)
        );
    }
}
