#![allow(dead_code)]

use classgrid_core::models::location::{LocationId, LocationStyles, LocationTable};

pub const MOI: &str = "Time,Mon,Tue,Wed,Thurs,Fri,Sat,Sun
07.30,,Hatha Yoga,,,Hatha Yoga,Pilates,
08.00,,,Zumba,Body Combat,,,BollyX
09.00,Pilates,,,,,Body Combat,Body Jam
18.00,,,,,AF Ignite,,
18.30,Dance Cardio,Pilates,Kpop,Pound Fit,,,
19.30,Body Combat,Zumba,BollyX,Body Combat,Freestyle,,";

pub const SEDAYU: &str = "Time,Mon,Tue,Wed,Thurs,Fri,Sat,Sun
08.00,Hatha Yoga,Body Combat,Vinyasa Yoga,Body Pump,Yoga Asanas,,
10.00,,,,,,Bootcamp,AF Ignite
17.00,,,,,,Booty & Abs,Fast Fit
18.15,BollyX,Pound Fit,Latin Dance,Barre Intensity,Zumba,,
19.15,Kpop,Matt Pilates,Step Aerobic,BollyX,,,
19.30,,,,,Body Pump,,";

pub fn location(id: &str) -> LocationId {
    LocationId::new(id).expect("valid location id")
}

pub fn table(id: &str, text: &str) -> LocationTable {
    LocationTable::new(location(id), text)
}

pub fn sample_sources() -> Vec<LocationTable> {
    vec![table("MOI", MOI), table("Sedayu", SEDAYU)]
}

pub fn sample_styles() -> LocationStyles {
    LocationStyles::new()
        .with(location("MOI"), "bg-blue-100 text-blue-800 border-blue-200")
        .with(location("Sedayu"), "bg-purple-100 text-purple-800 border-purple-200")
}
