use usbtypes::{
    descriptor::{ConfigurationDescriptor, EndpointDescriptor, InterfaceDescriptor},
    Class, DescriptorType, DeviceDescriptor, EndpointDirection, TransferType,
};

const LUNA_COUNTER_DEVICE_DESCRIPTOR: &[u8] = &[
    18, // bLength
    1,  // bDescriptorType
    0x00, 0x02, // bcdUSB
    0,    // bDeviceClass
    0,    // bDeviceSubClass
    0,    // bDeviceProtocol
    64,   // bMaxPacketSize0
    0xd0, 0x16, // idVendor
    0x3b, 0x0f, // idProduct
    0x00, 0x00, // bcdDevice
    1,    // iManufacturer
    2,    // iProduct
    3,    // iSerial
    1,    // bNumConfigurations
];

/// Configuration, interface and both bulk endpoints of the same device, as one chain.
const LUNA_COUNTER_CONFIGURATION: &[u8] = &[
    9, 2, 32, 0, 1, 1, 0, 0x80, 250, // configuration
    9, 4, 0, 0, 2, 0xff, 0, 0, 0, // interface
    7, 5, 0x81, 0x02, 0x00, 0x02, 0, // endpoint 1 IN
    7, 5, 0x01, 0x02, 0x00, 0x02, 0, // endpoint 1 OUT
];

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn luna_device_descriptor() {
    init_logging();

    let desc = DeviceDescriptor::from_bytes(LUNA_COUNTER_DEVICE_DESCRIPTOR).unwrap();

    assert_eq!(desc.bLength as usize, DeviceDescriptor::LENGTH);
    assert_eq!(desc.bDescriptorType, DescriptorType::DEVICE);
    assert_eq!(desc.bcdUSB, 0x0200);
    assert_eq!(desc.bDeviceClass, Class::PER_INTERFACE);
    assert_eq!(desc.bDeviceClass.to_string(), "per-interface");
    assert_eq!(desc.bMaxPacketSize0, 64);
    assert_eq!(desc.idVendor, 0x16d0);
    assert_eq!(desc.idProduct, 0x0f3b);
    assert_eq!(desc.bNumConfigurations, 1);
}

#[test]
fn luna_configuration_chain() {
    init_logging();

    let config = ConfigurationDescriptor::from_bytes(LUNA_COUNTER_CONFIGURATION).unwrap();
    assert_eq!(config.wTotalLength as usize, LUNA_COUNTER_CONFIGURATION.len());
    assert_eq!(config.bNumInterfaces, 1);

    let rest = &LUNA_COUNTER_CONFIGURATION[ConfigurationDescriptor::LENGTH..];
    let interface = InterfaceDescriptor::from_bytes(rest).unwrap();
    assert_eq!(interface.bInterfaceClass, Class::VENDOR_SPEC);
    assert_eq!(interface.bNumEndpoints, 2);

    let mut rest = &rest[InterfaceDescriptor::LENGTH..];
    let mut endpoints = Vec::new();
    while !rest.is_empty() {
        endpoints.push(EndpointDescriptor::from_bytes(rest).unwrap());
        rest = &rest[EndpointDescriptor::LENGTH..];
    }

    assert_eq!(endpoints.len(), interface.bNumEndpoints as usize);
    let directions = [EndpointDirection::IN, EndpointDirection::OUT];
    for (endpoint, direction) in endpoints.iter().zip(directions) {
        assert_eq!(endpoint.bDescriptorType, DescriptorType::ENDPOINT);
        assert_eq!(endpoint.bEndpointAddress.number(), 1);
        assert_eq!(endpoint.bEndpointAddress.direction(), direction);
        assert_eq!(endpoint.bmAttributes.transfer_type(), TransferType::BULK);
        assert_eq!(endpoint.wMaxPacketSize, 512);
    }
}

#[test]
fn truncated_device_descriptor_is_an_error() {
    init_logging();

    let result = DeviceDescriptor::from_bytes(&LUNA_COUNTER_DEVICE_DESCRIPTOR[..10]);
    assert!(matches!(result, Err(usbtypes::Error::MalformedDescriptor(_))));
}
