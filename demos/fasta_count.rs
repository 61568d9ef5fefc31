use fastrec::source::reader_from_path;
use fastrec::RecordScanner;
use std::env::args;
use std::io;
use std::path::Path;

fn main() -> io::Result<()>
{
    env_logger::init();
    for filename in args().skip(1)
    {
        let mut reader = reader_from_path(Path::new(&filename))?;
        let mut records = 0usize;
        let mut bases = 0usize;
        for result in RecordScanner::new(&mut reader)
        {
            let record = result?;
            records += 1;
            bases += record.seq_len();
        }
        println!("{}\t{}\t{}", filename, records, bases);
    }
    Ok(())
}
