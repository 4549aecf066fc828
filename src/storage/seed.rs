//! Initial data load.
//!
//! Truncates every entity table (restarting identity sequences) and restores
//! a known-good starting data set. The vehicle repair counters are seeded to
//! match the seeded repair records.

use sqlx::PgPool;

const TRUNCATE_ALL: &str = r#"TRUNCATE TABLE trip_driver,
    driver, trip, shipment, customer_phone, customer, repair_record,
    mechanic, certification, employee, vehicle, vehicle_type
    RESTART IDENTITY CASCADE"#;

const INSERTS: &[&str] = &[
    r#"INSERT INTO vehicle_type ("VehicleTypeName") VALUES
        ('Cargo Planes'),
        ('In-city trucks'),
        ('long haul trucks')"#,
    r#"INSERT INTO vehicle ("Brand", "Load", "Capacity", "Year", "NumberOfRepairs", "VehicleTypeID") VALUES
        ('Harris, Tran and Roberson', 6082, 14773, 2000, 1, 1),
        ('Thompson, Koch and Rivera', 3816, 16170, 2022, 2, 3),
        ('Vasquez Ltd', 6872, 20319, 2004, 0, 1),
        ('Scott Ltd', 8641, 24792, 2018, 1, 2),
        ('Young and Sons', 9942, 16923, 2003, 1, 3)"#,
    r#"INSERT INTO employee ("FirstName", "Surname", "Seniority") VALUES
        ('Colleen', 'Jones', 2),
        ('Marie', 'Mata', 4),
        ('Joseph', 'Moses', 8),
        ('Kayla', 'Roberts', 4),
        ('Lauren', 'Powers', 5)"#,
    r#"INSERT INTO certification ("EmployeeID", "VehicleTypeID") VALUES
        (1, 3),
        (2, 1),
        (3, 2),
        (4, 1),
        (5, 2)"#,
    r#"INSERT INTO mechanic ("EmployeeID", "VehicleTypeID") VALUES
        (1, 3),
        (2, 3),
        (3, 2),
        (4, 1),
        (5, 3)"#,
    r#"INSERT INTO repair_record ("EstimatedTime", "ActualCostTime", "VehicleID", "MechanicID") VALUES
        (13, 15, 1, 2),
        (8, 9, 2, 2),
        (6, 7, 2, 4),
        (7, 17, 4, 1),
        (11, 12, 5, 3)"#,
    r#"INSERT INTO customer ("CustomerName", "CustomerAddress") VALUES
        ('Alvarez, Sullivan and Duran', '09781 Graham Mountain, Port Timothy, DC 13114'),
        ('Erickson-Edwards', '04534 Catherine Pass Suite 307, Timothymouth, NJ 48613'),
        ('Cook, Coleman and Stewart', '6292 Choi Island Suite 129, South Michael, NY 80769'),
        ('Shepherd, Stark and Boyer', 'Unit 2836 Box 0310, DPO AA 43207'),
        ('Howard-Cardenas', '76695 Kenneth Union Suite 969, New Kevinchester, VT 73545')"#,
    r#"INSERT INTO customer_phone ("PhoneNumber", "CustomerID") VALUES
        ('140-780-1367x2479', 1),
        ('(711)988-6111x06296', 2),
        ('(711)988-6111x06266', 2),
        ('014.122.5345x04110', 3),
        ('901-329-8055x784', 4),
        ('+1-203-643-8281x815', 5)"#,
    r#"INSERT INTO shipment ("Weight", "Value", "OriginPlace", "DestinationPlace", "CustomerID") VALUES
        (1348, 13931, 'Taylorton', 'Valerieton', 4),
        (2932, 58764, 'North Bobbyfurt', 'North Michelleton', 2),
        (4491, 22032, 'Parkmouth', 'Patriciaberg', 4),
        (803, 58766, 'North Zachary', 'Port Gracemouth', 1),
        (2097, 31912, 'Wilkersonmouth', 'Lake Marissaland', 5)"#,
    r#"INSERT INTO trip ("FromPlace", "ToPlace", "VehicleID", "ShipmentID") VALUES
        ('North Annachester', 'Harperhaven', 2, 3),
        ('West Jamieborough', 'West Caleb', 4, 5),
        ('West James', 'Michaelport', 1, 2),
        ('North Lisa', 'East Sarah', 5, 1),
        ('Shawnhaven', 'Josephmouth', 3, 4)"#,
    r#"INSERT INTO driver ("DriverName") VALUES
        ('Dr. Francisco Myers'),
        ('Karen Martin'),
        ('Andrea Brown'),
        ('Michael Hoffman'),
        ('Meghan Brown')"#,
    r#"INSERT INTO trip_driver ("TripID", "DriverID") VALUES
        (1, 1),
        (1, 4),
        (2, 2),
        (3, 3),
        (4, 4),
        (5, 5)"#,
];

/// Wipes and reloads every table. Returns the number of statements run.
pub async fn load_initial_data(pool: &PgPool) -> Result<usize, sqlx::Error> {
    sqlx::query(TRUNCATE_ALL).execute(pool).await?;
    for insert in INSERTS {
        sqlx::query(insert).execute(pool).await?;
    }
    Ok(INSERTS.len())
}
