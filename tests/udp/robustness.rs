//! The decoders are fed bytes straight from the network. These tests throw
//! random datagrams at them.
use torrust_udp_decoder::udp::decoder::Decoder;
use torrust_udp_decoder::udp::error::Error;
use torrust_udp_decoder::udp::RawRequest;
use torrust_udp_decoder_test_helpers::{configuration, random};

use crate::common::logging;

const ROUNDS: usize = 200;

fn spoofing_decoder() -> Decoder {
    Decoder::new(&configuration::ephemeral_with_ip_spoofing().udp_decoder)
}

mod short_datagrams {
    use super::*;

    #[test]
    fn every_announce_shorter_than_the_fixed_fields_should_be_rejected_as_malformed() {
        logging::init();

        for len in 0..98 {
            let payload = random::bytes(len);

            let result = spoofing_decoder().announce(&RawRequest::new(&payload, None));

            assert!(matches!(result, Err(Error::MalformedPacket { .. })), "length {len}");
        }
    }

    #[test]
    fn every_scrape_shorter_than_one_info_hash_should_be_rejected_as_malformed() {
        logging::init();

        for len in 0..36 {
            let payload = random::bytes(len);

            let result = spoofing_decoder().scrape(&RawRequest::new(&payload, None));

            assert!(matches!(result, Err(Error::MalformedPacket { .. })), "length {len}");
        }
    }
}

mod random_datagrams {
    use rand::{thread_rng, Rng};
    use torrust_udp_decoder::udp::options::decode_options;
    use torrust_udp_decoder_primitives::info_hash::InfoHash;
    use torrust_udp_decoder_test_helpers::packet::ScrapeRequestBuilder;

    use super::*;

    #[test]
    fn an_announce_should_be_decoded_or_rejected_with_a_packet_or_event_error() {
        logging::init();

        let mut rng = thread_rng();

        for _ in 0..ROUNDS {
            let payload = random::bytes(rng.gen_range(98..600));

            match spoofing_decoder().announce(&RawRequest::new(&payload, None)) {
                Ok(request) => assert!(payload[83] <= 3 && request.event.to_u8() == payload[83]),
                Err(Error::MalformedEvent { event_id, .. }) => assert_eq!(event_id, payload[83]),
                Err(Error::MalformedPacket { .. }) => {}
                Err(err) => panic!("unexpected error: {err}"),
            }
        }
    }

    #[test]
    fn a_scrape_should_be_decoded_only_when_the_info_hashes_are_complete() {
        logging::init();

        let mut rng = thread_rng();

        for _ in 0..ROUNDS {
            let payload = random::bytes(rng.gen_range(36..600));

            let result = spoofing_decoder().scrape(&RawRequest::new(&payload, None));

            if (payload.len() - 16) % 20 == 0 {
                assert_eq!(result.unwrap().info_hashes.len(), (payload.len() - 16) / 20);
            } else {
                assert!(matches!(result, Err(Error::MalformedPacket { .. })));
            }
        }
    }

    #[test]
    fn random_info_hashes_should_come_back_verbatim_and_in_order() {
        logging::init();

        let info_hashes: Vec<InfoHash> = (0..10).map(|_| InfoHash(random::array())).collect();
        let packet = info_hashes
            .iter()
            .fold(ScrapeRequestBuilder::default(), |builder, info_hash| builder.with_info_hash(*info_hash))
            .into_bytes();

        let request = spoofing_decoder().scrape(&RawRequest::new(&packet, None)).unwrap();

        assert_eq!(request.info_hashes, info_hashes);
    }

    #[test]
    fn the_options_scanner_should_always_terminate_without_panicking() {
        logging::init();

        let mut rng = thread_rng();

        for _ in 0..ROUNDS {
            let trailer = random::bytes(rng.gen_range(0..300));

            if let Err(err) = decode_options(&trailer) {
                assert!(matches!(err, Error::MalformedPacket { .. }));
            }
        }
    }
}

mod concurrent_decoding {
    use std::net::{IpAddr, Ipv4Addr};
    use std::thread;

    use torrust_udp_decoder_test_helpers::packet::{sample_info_hash, AnnounceRequestBuilder, ScrapeRequestBuilder};

    use super::*;

    #[test]
    fn many_threads_should_decode_the_same_datagrams_to_the_same_requests() {
        logging::init();

        let decoder = spoofing_decoder();
        let from = Some(IpAddr::V4(Ipv4Addr::LOCALHOST));

        let announce = AnnounceRequestBuilder::default().with_url_data(b"/announce").into_bytes();
        let scrape = ScrapeRequestBuilder::default()
            .with_info_hash(sample_info_hash())
            .with_info_hash(sample_info_hash())
            .into_bytes();

        let expected = (
            decoder.announce(&RawRequest::new(&announce, from)).unwrap(),
            decoder.scrape(&RawRequest::new(&scrape, from)).unwrap(),
        );

        let results: Vec<_> = thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    scope.spawn(|| {
                        (
                            decoder.announce(&RawRequest::new(&announce, from)).unwrap(),
                            decoder.scrape(&RawRequest::new(&scrape, from)).unwrap(),
                        )
                    })
                })
                .collect();

            handles.into_iter().map(|handle| handle.join().unwrap()).collect()
        });

        for result in results {
            assert_eq!(result, expected);
        }
    }
}
