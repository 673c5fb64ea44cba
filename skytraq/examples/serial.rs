#[cfg(feature = "serial")]
mod serial {
    use chrono::prelude::*;
    use skytraq::{
        Attribute, Constellation, DriverConfig, RestartMode, SerialConfig, SerialTransport,
        Skytraq, SystemRestart,
    };

    pub fn main() {
        let transport = SerialTransport::new(SerialConfig::new("/dev/ttyUSB0", 9600));
        let mut dev = Skytraq::new(transport, DriverConfig::default());
        dev.begin().unwrap();

        println!("Selecting GPS + GLONASS...");
        if !dev.set_constellation(Constellation::GPS | Constellation::GLONASS, Attribute::Sram) {
            println!("Constellation change not acknowledged");
        }

        println!("Hot restart with time and position hints...");
        let restart = SystemRestart::new(RestartMode::Hot)
            .with_time(&Utc::now().naive_utc())
            .unwrap()
            .with_position(3020, -9750, 200);
        match dev.send(&restart) {
            Err(e) => {
                println!("Got error restarting: {}", e);
            },
            _ => println!("Restarted"),
        }
    }
}

fn main() {
    #[cfg(feature = "serial")]
    serial::main()
}
