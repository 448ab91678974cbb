// End-to-end checks of the hexpng binary.

#[cfg(test)]
mod tests {
    use assert_cmd::Command;
    use predicates::prelude::*;
    use tempfile::tempdir;

    const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    fn hexpng() -> Command {
        let mut cmd = Command::cargo_bin("hexpng").unwrap();
        cmd.env("NO_COLOR", "1").env_remove("RUST_LOG").env_remove("HEXPNG_STYLE").env_remove("HEXPNG_SIGNATURE");
        cmd
    }

    fn sample_png() -> Vec<u8> {
        let mut data = PNG_SIGNATURE.to_vec();
        data.extend(b"\x00\x00\x00\x0dIHDR");
        data.extend((0u8..40).collect::<Vec<_>>());
        data
    }

    #[test]
    fn encode_plain_to_stdout() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("sig.png");
        std::fs::write(&input, PNG_SIGNATURE).unwrap();

        hexpng()
            .arg("encode")
            .arg(&input)
            .assert()
            .success()
            .stdout("89504e470d0a1a0a\n");
    }

    #[test]
    fn encode_xxd_to_stdout() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("sig.png");
        std::fs::write(&input, PNG_SIGNATURE).unwrap();

        hexpng()
            .args(["encode", "-s", "xxd"])
            .arg(&input)
            .assert()
            .success()
            .stdout("00000000: 8950 4e47 0d0a 1a0a  .PNG....\n");
    }

    #[test]
    fn xxd_file_roundtrip_lands_next_to_input() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("image.png");
        let dump = dir.path().join("image.txt");
        std::fs::write(&input, sample_png()).unwrap();

        hexpng()
            .args(["encode", "--style", "xxd", "-o"])
            .arg(&dump)
            .arg(&input)
            .assert()
            .success()
            .stdout(predicate::str::contains("Hexdump written to:"));

        hexpng()
            .args(["decode", "-f"])
            .arg(&dump)
            .args(["-o", "restored.png"])
            .assert()
            .success()
            .stdout(predicate::str::contains("File size: 56 bytes"))
            .stdout(predicate::str::contains("Signature verified: 89504e470d0a1a0a"));

        let restored = std::fs::read(dir.path().join("restored.png")).unwrap();
        assert_eq!(restored, sample_png());
    }

    #[test]
    fn decode_text_skips_padding_and_creates_dirs() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested/deeper/out.png");

        hexpng()
            .args(["decode", "-t", "ffff89504e470d0a1a0a0102", "-o"])
            .arg(&out)
            .assert()
            .success();

        let restored = std::fs::read(&out).unwrap();
        assert_eq!(restored, [&PNG_SIGNATURE[..], &[0x01, 0x02]].concat());
    }

    #[test]
    fn decode_custom_signature() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("doc.pdf");

        hexpng()
            .args(["decode", "-t", "00255044462d", "--signature", "25504446", "-o"])
            .arg(&out)
            .assert()
            .success();

        assert_eq!(std::fs::read(&out).unwrap(), b"%PDF-");
    }

    #[test]
    fn decode_without_signature_fails() {
        let dir = tempdir().unwrap();
        hexpng()
            .args(["decode", "-t", "00112233", "-o"])
            .arg(dir.path().join("x.png"))
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Error:"))
            .stderr(predicate::str::contains("not found"));
        assert!(!dir.path().join("x.png").exists());
    }

    #[test]
    fn decode_malformed_fails() {
        let dir = tempdir().unwrap();
        hexpng()
            .args(["decode", "-t", "89504e47xyz", "-o"])
            .arg(dir.path().join("x.png"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid hex character"))
            .stderr(predicate::str::contains("Formats supported"));
    }

    #[test]
    fn decode_needs_exactly_one_input() {
        hexpng().args(["decode", "-o", "x.png"]).assert().failure();
        hexpng()
            .args(["decode", "-t", "00", "-f", "dump.txt", "-o", "x.png"])
            .assert()
            .failure();
    }

    #[test]
    fn missing_input_file() {
        let dir = tempdir().unwrap();
        hexpng()
            .args(["decode", "-f"])
            .arg(dir.path().join("nope.txt"))
            .args(["-o", "x.png"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("input file not found"));
    }
}
