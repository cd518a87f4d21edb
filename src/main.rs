use fetsim::{ksa64, Circuit, Signal};
use std::io::{self, BufRead, Write};

fn prompt(stdin: &mut impl BufRead, text: &str) -> Option<String> {
    print!("{}", text);
    io::stdout().flush().unwrap();
    let mut line = String::new();
    if stdin.read_line(&mut line).unwrap() == 0 {
        // EOF
        println!();
        return None;
    }
    Some(line.trim().to_string())
}

fn main() {
    ctrlc::set_handler(|| {
        println!();
        std::process::exit(0);
    })
    .unwrap();

    let mut c = Circuit::new();
    let vdd = c.rail();
    let ksa = ksa64(&mut c, vdd).unwrap();
    c.attach_load(ksa.cin).unwrap();
    c.attach_load(ksa.cout).unwrap();
    let i0 = Signal::new(&mut c, &ksa.i0).unwrap();
    let i1 = Signal::new(&mut c, &ksa.i1).unwrap();
    let o = Signal::new(&mut c, &ksa.o).unwrap();
    c.energize(vdd);

    let stdin = io::stdin();
    let mut stdin = stdin.lock();

    loop {
        let a = match prompt(&mut stdin, "Input A: ") {
            Some(line) => {
                if line == "diagram" {
                    ksa.print_state_diagram(&c);
                    continue;
                }
                match line.parse::<u64>() {
                    Ok(a) => a,
                    Err(_) => {
                        println!("Input out of range (must be >= 0 and <= {})", u64::MAX);
                        continue;
                    }
                }
            }
            None => return,
        };

        let b = match prompt(&mut stdin, "Input B: ") {
            Some(line) => match line.parse::<u64>() {
                Ok(b) => b,
                Err(_) => {
                    println!("Input out of range (must be >= 0 and <= {})", u64::MAX);
                    continue;
                }
            },
            None => return,
        };

        let cin = match prompt(&mut stdin, "Carry-in (T/f): ") {
            Some(line) => match line.to_lowercase().as_str() {
                "t" => true,
                "f" => false,
                _ => {
                    println!("Input must be either 't' or 'f' (case-insensitive)");
                    continue;
                }
            },
            None => return,
        };

        i0.set(&mut c, a);
        i1.set(&mut c, b);
        c.set_load(ksa.cin, cin);

        println!(">>> {} cout={}", o.get(&c), c.energized(ksa.cout) as u8);
    }
}
