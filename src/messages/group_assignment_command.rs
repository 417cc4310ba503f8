//! Type 23: group assignment command — a base station assigning a report
//! interval and quiet period to a class of stations within a geographic box.

use crate::bitbuffer::{putbits, putsbits, sbits, ubits};
use crate::errors::Result;
use crate::record::Header;

pub const BITS: usize = 160;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GroupAssignmentCommand {
    pub ne_lon_raw: i32,
    pub ne_lat_raw: i32,
    pub sw_lon_raw: i32,
    pub sw_lat_raw: i32,
    pub station_type: u8,
    pub ship_type: u8,
    pub txrx: u8,
    pub interval: u8,
    pub quiet: u8,
}

pub fn decode(buf: &[u8], _header: &Header) -> Result<GroupAssignmentCommand> {
    Ok(GroupAssignmentCommand {
        ne_lon_raw: sbits(buf, 40, 18)? as i32,
        ne_lat_raw: sbits(buf, 58, 17)? as i32,
        sw_lon_raw: sbits(buf, 75, 18)? as i32,
        sw_lat_raw: sbits(buf, 93, 17)? as i32,
        station_type: ubits(buf, 110, 4)? as u8,
        ship_type: ubits(buf, 114, 8)? as u8,
        txrx: ubits(buf, 144, 2)? as u8,
        interval: ubits(buf, 146, 4)? as u8,
        quiet: ubits(buf, 150, 4)? as u8,
    })
}

pub fn encode(header: &Header, msg: &GroupAssignmentCommand, buf: &mut [u8]) -> Result<usize> {
    putbits(buf, 0, 6, header.msg_type as u64)?;
    putbits(buf, 6, 2, header.repeat as u64)?;
    putbits(buf, 8, 30, header.mmsi as u64)?;
    putsbits(buf, 40, 18, msg.ne_lon_raw as i64)?;
    putsbits(buf, 58, 17, msg.ne_lat_raw as i64)?;
    putsbits(buf, 75, 18, msg.sw_lon_raw as i64)?;
    putsbits(buf, 93, 17, msg.sw_lat_raw as i64)?;
    putbits(buf, 110, 4, msg.station_type as u64)?;
    putbits(buf, 114, 8, msg.ship_type as u64)?;
    putbits(buf, 144, 2, msg.txrx as u64)?;
    putbits(buf, 146, 4, msg.interval as u64)?;
    putbits(buf, 150, 4, msg.quiet as u64)?;
    Ok(BITS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let header = Header {
            msg_type: 23,
            repeat: 0,
            mmsi: 2_611_270,
        };
        let msg = GroupAssignmentCommand {
            ne_lon_raw: 531,
            ne_lat_raw: 1927,
            sw_lon_raw: 512,
            sw_lat_raw: 1910,
            station_type: 6,
            ship_type: 0,
            txrx: 0,
            interval: 10,
            quiet: 0,
        };
        let mut buf = [0u8; 20];
        encode(&header, &msg, &mut buf).unwrap();
        assert_eq!(decode(&buf, &header).unwrap(), msg);
    }

    #[test]
    fn txrx_does_not_alias_interval() {
        let header = Header {
            msg_type: 23,
            repeat: 0,
            mmsi: 2_611_270,
        };
        // txrx's top 2 bits would spill into interval's field if txrx were
        // ever widened back past its true 2-bit width.
        let msg = GroupAssignmentCommand {
            ne_lon_raw: 0,
            ne_lat_raw: 0,
            sw_lon_raw: 0,
            sw_lat_raw: 0,
            station_type: 0,
            ship_type: 0,
            txrx: 3,
            interval: 10,
            quiet: 0,
        };
        let mut buf = [0u8; 20];
        encode(&header, &msg, &mut buf).unwrap();
        let decoded = decode(&buf, &header).unwrap();
        assert_eq!(decoded.txrx, 3);
        assert_eq!(decoded.interval, 10);
    }
}
