use fastrec::source::{is_fasta_path, reader_from_path};
use fastrec::RecordScanner;
use log::warn;
use std::env::args;
use std::io;
use std::path::Path;

fn main() -> io::Result<()>
{
    env_logger::init();
    for filename in args().skip(1)
    {
        let path = Path::new(&filename);
        if !is_fasta_path(path)
        {
            warn!("{}: not a FASTA path, skipping", filename);
            continue;
        }
        println!("{}", filename);
        let mut reader = reader_from_path(path)?;
        let mut scanner = RecordScanner::new(&mut reader);
        while let Some(record) = scanner.next_record()?
        {
            println!("{}\t{}\t{}", record.id, record.seq_len(), record.description);
        }
    }
    Ok(())
}
