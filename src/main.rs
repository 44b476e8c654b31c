use smscode::smscode;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    smscode(std::env::args_os().skip(1))
}
