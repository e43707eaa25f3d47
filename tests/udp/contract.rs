use std::net::{IpAddr, Ipv4Addr};

use torrust_udp_decoder::udp::decoder::Decoder;
use torrust_udp_decoder::udp::RawRequest;
use torrust_udp_decoder_test_helpers::configuration;

fn sample_remote_addr() -> IpAddr {
    IpAddr::V4(Ipv4Addr::new(126, 0, 0, 1))
}

fn default_decoder() -> Decoder {
    Decoder::new(&configuration::ephemeral().udp_decoder)
}

fn spoofing_decoder() -> Decoder {
    Decoder::new(&configuration::ephemeral_with_ip_spoofing().udp_decoder)
}

mod receiving_an_announce_request {
    use std::net::{IpAddr, Ipv4Addr, SocketAddr};

    use torrust_udp_decoder::udp::error::Error;
    use torrust_udp_decoder::udp::header::{Action, Header};
    use torrust_udp_decoder::udp::options::AnnounceOption;
    use torrust_udp_decoder::udp::RawRequest;
    use torrust_udp_decoder_primitives::announce_event::AnnounceEvent;
    use torrust_udp_decoder_primitives::info_hash::InfoHash;
    use torrust_udp_decoder_primitives::peer_id::PeerId;
    use torrust_udp_decoder_test_helpers::packet::AnnounceRequestBuilder;

    use super::{default_decoder, sample_remote_addr, spoofing_decoder};
    use crate::common::logging;

    fn full_announce_request() -> AnnounceRequestBuilder {
        AnnounceRequestBuilder::default()
            .with_connection_id(0x1111_2222_3333_4444)
            .with_transaction_id(0x5555_6666)
            .with_info_hash(InfoHash([0x9C; 20]))
            .with_peer_id(PeerId(*b"-TR3000-000000000042"))
            .with_downloaded(1_234_567_890_123)
            .with_left(u64::MAX)
            .with_uploaded(42)
            .with_event(AnnounceEvent::Completed)
            .with_ip_address(Ipv4Addr::new(192, 168, 1, 100))
            .with_key(0xCAFE_BABE)
            .with_num_want(200)
            .with_port(51413)
    }

    #[test]
    fn the_dispatch_layer_should_route_it_by_its_header() {
        logging::init();

        let packet = full_announce_request().into_bytes();

        let header = Header::decode(&packet).unwrap();

        assert_eq!(header.action, Action::Announce);
        assert_eq!(header.connection_id, 0x1111_2222_3333_4444);
        assert_eq!(header.transaction_id, 0x5555_6666);
    }

    #[test]
    fn it_should_decode_every_fixed_field() {
        logging::init();

        let packet = full_announce_request().into_bytes();

        let request = default_decoder()
            .announce(&RawRequest::new(&packet, Some(sample_remote_addr())))
            .unwrap();

        assert_eq!(request.info_hash, InfoHash([0x9C; 20]));
        assert_eq!(request.peer_id, PeerId(*b"-TR3000-000000000042"));
        assert_eq!(request.downloaded, 1_234_567_890_123);
        assert_eq!(request.left, u64::MAX);
        assert_eq!(request.uploaded, 42);
        assert_eq!(request.event, AnnounceEvent::Completed);
        assert_eq!(request.num_want, 200);
        assert_eq!(request.peer_addr, SocketAddr::new(sample_remote_addr(), 51413));
        assert_eq!(request.params, None);
    }

    #[test]
    fn re_encoding_the_decoded_fields_should_reproduce_the_fixed_header() {
        logging::init();

        let builder = full_announce_request();
        let packet = builder.clone().into_bytes();

        let request = spoofing_decoder().announce(&RawRequest::new(&packet, None)).unwrap();

        let IpAddr::V4(ip) = request.peer_addr.ip() else {
            panic!("a spoofed peer IP is always IPv4");
        };

        let re_encoded = builder
            .with_info_hash(request.info_hash)
            .with_peer_id(request.peer_id)
            .with_downloaded(request.downloaded)
            .with_left(request.left)
            .with_uploaded(request.uploaded)
            .with_event(request.event)
            .with_ip_address(ip)
            .with_num_want(request.num_want)
            .with_port(request.peer_addr.port())
            .into_bytes();

        assert_eq!(re_encoded, packet);
    }

    #[test]
    fn it_should_accept_an_event_field_with_non_zero_leading_bytes() {
        logging::init();

        let packet = full_announce_request().with_event_id(0xFFFF_FF02).into_bytes();

        let request = default_decoder()
            .announce(&RawRequest::new(&packet, Some(sample_remote_addr())))
            .unwrap();

        assert_eq!(request.event, AnnounceEvent::Started);
    }

    #[test]
    fn it_should_reject_an_unknown_event() {
        logging::init();

        let packet = full_announce_request().with_event_id(4).into_bytes();

        let result = default_decoder().announce(&RawRequest::new(&packet, Some(sample_remote_addr())));

        assert!(matches!(result, Err(Error::MalformedEvent { event_id: 4, .. })));
    }

    #[test]
    fn it_should_use_the_sender_address_instead_of_the_announced_ip_by_default() {
        logging::init();

        let packet = full_announce_request().into_bytes();

        let request = default_decoder()
            .announce(&RawRequest::new(&packet, Some(sample_remote_addr())))
            .unwrap();

        assert_eq!(request.peer_addr.ip(), sample_remote_addr());
    }

    #[test]
    fn it_should_reject_the_request_when_the_sender_address_is_unknown_and_ip_spoofing_is_disallowed() {
        logging::init();

        let packet = full_announce_request().into_bytes();

        let result = default_decoder().announce(&RawRequest::new(&packet, None));

        assert!(matches!(result, Err(Error::MalformedIp { .. })));
        assert_eq!(result.unwrap_err().client_message(), "malformed IP address");
    }

    #[test]
    fn it_should_use_the_announced_ip_when_ip_spoofing_is_allowed() {
        logging::init();

        let packet = full_announce_request().into_bytes();

        let request = spoofing_decoder()
            .announce(&RawRequest::new(&packet, Some(sample_remote_addr())))
            .unwrap();

        assert_eq!(request.peer_addr.ip(), IpAddr::V4(Ipv4Addr::new(192, 168, 1, 100)));
    }

    #[test]
    fn it_should_collect_the_url_data_options() {
        logging::init();

        let packet = full_announce_request()
            .with_url_data(b"/announce")
            .with_raw_options(&[0x1, 0x1])
            .with_url_data(b"?auth=abc")
            .with_end_of_options()
            .into_bytes();

        let request = default_decoder()
            .announce(&RawRequest::new(&packet, Some(sample_remote_addr())))
            .unwrap();

        let params = request.params.unwrap();

        assert_eq!(
            params.iter().cloned().collect::<Vec<_>>(),
            vec![
                AnnounceOption::UrlData(b"/announce".to_vec()),
                AnnounceOption::UrlData(b"?auth=abc".to_vec())
            ]
        );
        assert_eq!(params.url_data(), b"/announce?auth=abc".to_vec());
    }

    #[test]
    fn it_should_accept_options_it_does_not_know_about() {
        logging::init();

        let packet = full_announce_request()
            .with_url_data(b"/a")
            .with_raw_options(&[0x7F, 0x02, 0xFF, 0x00])
            .into_bytes();

        let request = default_decoder()
            .announce(&RawRequest::new(&packet, Some(sample_remote_addr())))
            .unwrap();

        assert_eq!(request.params.unwrap().url_data(), b"/a".to_vec());
    }

    #[test]
    fn it_should_reject_a_truncated_url_data_option() {
        logging::init();

        let packet = full_announce_request().with_raw_options(&[0x2, 0x10, b'/', b'a']).into_bytes();

        let result = default_decoder().announce(&RawRequest::new(&packet, Some(sample_remote_addr())));

        assert!(matches!(result, Err(Error::MalformedPacket { .. })));
    }

    #[test]
    fn the_decoded_request_should_be_serializable_for_the_tracker_logs() {
        logging::init();

        let packet = full_announce_request().into_bytes();

        let request = default_decoder()
            .announce(&RawRequest::new(&packet, Some(sample_remote_addr())))
            .unwrap();

        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["info_hash"], "9c9c9c9c9c9c9c9c9c9c9c9c9c9c9c9c9c9c9c9c");
        assert_eq!(json["event"], "Completed");
        assert_eq!(json["peer_addr"], "126.0.0.1:51413");
    }
}

mod receiving_a_scrape_request {
    use torrust_udp_decoder::udp::error::Error;
    use torrust_udp_decoder::udp::header::{Action, Header};
    use torrust_udp_decoder::udp::RawRequest;
    use torrust_udp_decoder_primitives::info_hash::InfoHash;
    use torrust_udp_decoder_test_helpers::packet::{sample_info_hash, ScrapeRequestBuilder};

    use super::{default_decoder, sample_remote_addr};
    use crate::common::logging;

    #[test]
    fn the_dispatch_layer_should_route_it_by_its_header() {
        logging::init();

        let packet = ScrapeRequestBuilder::default().with_info_hash(sample_info_hash()).into_bytes();

        assert_eq!(Header::decode(&packet).unwrap().action, Action::Scrape);
    }

    #[test]
    fn it_should_decode_a_single_info_hash() {
        logging::init();

        let packet = ScrapeRequestBuilder::default().with_info_hash(sample_info_hash()).into_bytes();
        assert_eq!(packet.len(), 36);

        let request = default_decoder()
            .scrape(&RawRequest::new(&packet, Some(sample_remote_addr())))
            .unwrap();

        assert_eq!(request.info_hashes, vec![sample_info_hash()]);
    }

    #[test]
    fn it_should_decode_many_info_hashes_in_the_order_they_were_sent() {
        logging::init();

        let info_hashes = vec![InfoHash([3; 20]), InfoHash([1; 20]), InfoHash([2; 20])];
        let packet = info_hashes
            .iter()
            .fold(ScrapeRequestBuilder::default(), |builder, info_hash| builder.with_info_hash(*info_hash))
            .into_bytes();
        assert_eq!(packet.len(), 76);

        let request = default_decoder()
            .scrape(&RawRequest::new(&packet, Some(sample_remote_addr())))
            .unwrap();

        assert_eq!(request.info_hashes, info_hashes);
    }

    #[test]
    fn it_should_reject_a_request_without_info_hashes() {
        logging::init();

        let packet = ScrapeRequestBuilder::default().into_bytes();

        let result = default_decoder().scrape(&RawRequest::new(&packet, Some(sample_remote_addr())));

        assert!(matches!(result, Err(Error::MalformedPacket { .. })));
    }

    #[test]
    fn it_should_reject_a_partial_info_hash() {
        logging::init();

        let mut packet = ScrapeRequestBuilder::default().with_info_hash(sample_info_hash()).into_bytes();
        packet.extend_from_slice(&[0xAA; 19]);

        let result = default_decoder().scrape(&RawRequest::new(&packet, Some(sample_remote_addr())));

        assert!(matches!(result, Err(Error::MalformedPacket { .. })));
        assert_eq!(result.unwrap_err().client_message(), "malformed packet");
    }
}
