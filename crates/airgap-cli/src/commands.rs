//! Batch drivers behind each subcommand.
//!
//! Failures for a single index are logged and that row is skipped; I/O and
//! parse errors abort the command.

use std::io::{BufRead, Write};

use airgap_core::{AccountIndex, Address, Deriver, Network, PublicKeyPoint};
use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::tsv::{read_rows, TsvWriter};

/// Write `index\twif` rows for `count` indices from `start`.
pub fn write_wifs<W: Write>(deriver: &Deriver, start: u64, count: u64, out: W) -> Result<usize> {
    let results = deriver.map_range(AccountIndex::new(start), count, |index| deriver.wif(index));

    let mut writer = TsvWriter::new(out);
    for (index, wif) in results {
        if let Ok(wif) = wif {
            writer.write_row(index.get(), wif.as_str())?;
        }
    }
    finish(writer, "wif")
}

/// Write `index\tpubkey-hex` rows for `count` indices from `start`.
pub fn write_pubkeys<W: Write>(deriver: &Deriver, start: u64, count: u64, out: W) -> Result<usize> {
    let results = deriver.map_range(AccountIndex::new(start), count, |index| {
        deriver.public_key(index)
    });

    let mut writer = TsvWriter::new(out);
    for (index, pk) in results {
        if let Ok(pk) = pk {
            writer.write_row(index.get(), &pk.to_hex())?;
        }
    }
    finish(writer, "pubkey")
}

/// Convert `index\tpubkey-hex` rows into `index\taddress` rows.
pub fn write_addresses<R: BufRead, W: Write>(network: Network, input: R, out: W) -> Result<usize> {
    let rows = read_rows(input).context("reading public keys")?;

    let mut writer = TsvWriter::new(out);
    for (index, pk_hex) in rows {
        match PublicKeyPoint::from_hex(&pk_hex) {
            Ok(pk) => {
                let address = Address::encode_for_network(&pk, network);
                writer.write_row(index, address.as_str())?;
            }
            Err(e) => warn!(index, error = %e, "skipping public key"),
        }
    }
    finish(writer, "addr")
}

/// Write one JSON object per derived account.
pub fn write_accounts<W: Write>(deriver: &Deriver, start: u64, count: u64, mut out: W) -> Result<usize> {
    let mut written = 0;
    for (_, account) in deriver.accounts(AccountIndex::new(start), count) {
        if let Ok(account) = account {
            serde_json::to_writer(&mut out, &account).context("serializing account")?;
            writeln!(out).context("writing account")?;
            written += 1;
        }
    }
    out.flush().context("flushing output")?;
    info!(rows = written, "accounts written");
    Ok(written)
}

fn finish<W: Write>(writer: TsvWriter<W>, kind: &str) -> Result<usize> {
    let rows = writer.rows();
    writer.finish()?;
    info!(rows, kind, "rows written");
    Ok(rows)
}
