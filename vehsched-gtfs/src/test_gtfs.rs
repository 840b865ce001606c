//! a tiny GTFS directory written for tests.
use std::path::Path;

const AGENCY: &str = "agency_id,agency_name,agency_url,agency_timezone
hsl,Test Transit,https://example.com,Europe/Helsinki
";

const STOPS: &str = "stop_id,stop_name,stop_lat,stop_lon,location_type,parent_station
s1,First,60.10,24.90,0,
st1,Station,60.17,24.95,1,
p1,Platform,,,0,st1
s3,Last,60.20,25.00,0,
lost,Nowhere,,,0,
";

const ROUTES: &str = "route_id,agency_id,route_short_name,route_long_name,route_type
tram,hsl,1,Tram line,0
bus,hsl,55,Bus line,3
ferry,hsl,F,Ferry line,4
";

const TRIPS: &str = "route_id,service_id,trip_id
bus,wk,t1
bus,wk,t2
tram,sat,t3
ferry,wk,t4
";

const STOP_TIMES: &str = "trip_id,arrival_time,departure_time,stop_id,stop_sequence
t1,06:00:00,06:01:00,s1,1
t1,06:10:00,06:10:00,p1,2
t1,06:20:00,06:20:00,s3,3
t2,07:00:00,07:00:00,s3,1
t2,07:20:00,07:20:00,s1,2
t3,08:00:00,08:00:00,s1,1
t3,08:10:00,08:10:00,p1,2
t4,09:00:00,09:00:00,s1,1
t4,09:30:00,09:30:00,s3,2
";

const CALENDAR: &str = "service_id,monday,tuesday,wednesday,thursday,friday,saturday,sunday,start_date,end_date
wk,1,1,1,1,1,0,0,20240101,20241231
sat,0,0,0,0,0,1,0,20240101,20241231
";

pub fn write_test_gtfs(dir: &Path) {
    for (filename, contents) in [
        ("agency.txt", AGENCY),
        ("stops.txt", STOPS),
        ("routes.txt", ROUTES),
        ("trips.txt", TRIPS),
        ("stop_times.txt", STOP_TIMES),
        ("calendar.txt", CALENDAR),
    ] {
        std::fs::write(dir.join(filename), contents)
            .unwrap_or_else(|e| panic!("test invariant failed: cannot write {filename}: {e}"));
    }
}
