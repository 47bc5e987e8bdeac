pub const MOI: &str = "Time,Mon,Tue,Wed,Thurs,Fri,Sat,Sun
07.30,,Hatha Yoga,,,Hatha Yoga,Pilates,
08.00,,,Zumba,Body Combat,,,BollyX
09.00,Pilates,,,,,Body Combat,Body Jam
18.00,,,,,AF Ignite,,
18.30,Dance Cardio,Pilates,Kpop,Pound Fit,,,
19.30,Body Combat,Zumba,BollyX,Body Combat,Freestyle,,";

pub const BELLA_TERRA: &str = "Time,Mon,Tue,Wed,Thurs,Fri,Sat,Sun
06.30,,,Basic Yoga,,,,
07.00,Body Combat,Hatha Yoga,,Body Pump,Pilates,,
08.00,,Tabata,,Bootcamp,,Body Pump,
18.00,Zumba,Dance,Body Combat,Pilates,Body Combat,,
19.00,Body Pump,Basic Yoga,Zumba,,Pound,,
20.00,,Cardio,,,Vinyasa Yoga,,";

pub const SEDAYU: &str = "Time,Mon,Tue,Wed,Thurs,Fri,Sat,Sun
08.00,Hatha Yoga,Body Combat,Vinyasa Yoga,Body Pump,Yoga Asanas,,
10.00,,,,,,Bootcamp,AF Ignite
17.00,,,,,,Booty & Abs,Fast Fit
18.15,BollyX,Pound Fit,Latin Dance,Barre Intensity,Zumba,,
19.15,Kpop,Matt Pilates,Step Aerobic,BollyX,,,
19.30,,,,,Body Pump,,";

pub const SUNTER_MALL: &str = "Time,Mon,Tue,Wed,Thurs,Fri,Sat,Sun
09.00,HIIT,,,,,,
10.00,Zumba,Body Combat,Bootcamp,Zumba,Body Pump,Body Pump,Dance Fitness
18.00,Pound Fit,Aerobic,,Aerobic,,,
19.05,Body Pump,Pilates,Body Combat,Dance Fitness,Yoga,Zumba,
20.10,Yoga Stretch,Zumba,,Yoga,Body Combat,,";

/// Location identifier, table text and style token, in legend order.
pub const LOCATIONS: [(&str, &str, &str); 4] = [
    ("MOI", MOI, "bg-blue-100 text-blue-800 border-blue-200"),
    (
        "BellaTerra",
        BELLA_TERRA,
        "bg-green-100 text-green-800 border-green-200",
    ),
    (
        "Sedayu",
        SEDAYU,
        "bg-purple-100 text-purple-800 border-purple-200",
    ),
    (
        "SunterMall",
        SUNTER_MALL,
        "bg-orange-100 text-orange-800 border-orange-200",
    ),
];

/// Weekday blocked windows: `(day, start, end)`.
pub const BLOCKED: [(chrono::Weekday, &str, &str); 11] = [
    (chrono::Weekday::Mon, "18.00", "22.00"),
    (chrono::Weekday::Mon, "09.00", "11.00"),
    (chrono::Weekday::Tue, "06.30", "07.30"),
    (chrono::Weekday::Tue, "09.00", "11.00"),
    (chrono::Weekday::Wed, "19.30", "22.00"),
    (chrono::Weekday::Wed, "09.00", "11.00"),
    (chrono::Weekday::Thu, "18.00", "22.00"),
    (chrono::Weekday::Thu, "09.00", "11.00"),
    (chrono::Weekday::Fri, "07.00", "08.30"),
    (chrono::Weekday::Fri, "09.00", "11.00"),
    (chrono::Weekday::Fri, "17.00", "20.00"),
];
